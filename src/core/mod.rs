//! # Core Module
//!
//! 모든 계층이 공유하는 기반 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 리포지토리/서비스/핸들러가 공유하는 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//!
//! ### [`context`] - 요청 컨텍스트
//! - **RequestContext**: 요청 ID와 취소 토큰을 담아 코어까지 전달
//! - **FromRequest 구현**: 핸들러 인자로 바로 추출 가능
//!
//! ## 의존성 주입
//!
//! 전역 레지스트리 대신 `main`에서 리포지토리를 만들어 서비스에 주입하고,
//! 서비스는 `web::Data`로 핸들러에 전달합니다.
//!
//! ```rust,ignore
//! let repository = Arc::new(InMemoryUserRepository::new());
//! let user_service = web::Data::new(UserService::new(repository));
//!
//! App::new().app_data(user_service.clone())
//! ```

pub mod context;
pub mod errors;

pub use context::*;
pub use errors::*;
