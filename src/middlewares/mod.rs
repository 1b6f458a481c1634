//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 패닉 복구 미들웨어 (RecoveryMiddleware)
//! - 핸들러 패닉을 500 JSON 응답으로 변환
//! - 패닉 메시지와 요청 경로를 에러 로그로 기록
//!
//! 요청 로깅은 `actix_web::middleware::Logger`를 그대로 사용합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{middleware, App};
//! use crate::middlewares::RecoveryMiddleware;
//!
//! App::new()
//!     .wrap(RecoveryMiddleware::new())
//!     .wrap(middleware::Logger::default())
//! ```

pub mod recovery_middleware;
mod recovery_inner;

pub use recovery_middleware::RecoveryMiddleware;
