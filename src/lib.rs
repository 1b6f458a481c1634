//! 사용자 서비스 백엔드
//!
//! 단일 "사용자" 리소스에 대한 CRUD REST API를 제공하는 서비스입니다.
//! 저장소는 프로세스 메모리에 있으며, 동시 읽기/쓰기 환경에서
//! 사용자명과 이메일의 유일성을 보장합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 부분 수정, 삭제
//! - **인메모리 저장소**: 단일 RwLock과 유니크 인덱스, 단조 증가 ID
//! - **명시적 DI**: 저장소를 서비스에, 서비스를 `web::Data`로 주입 (전역 상태 없음)
//! - **패닉 복구**: 핸들러 패닉을 500 JSON 응답으로 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 중복 사전 검사, 병합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← trait + 인메모리 구현
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::core::RequestContext;
//! use user_service_backend::repositories::users::InMemoryUserRepository;
//! use user_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let user = service.create_user(&RequestContext::new(), request).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
