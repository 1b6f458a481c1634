//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 조회, 부분 수정, 삭제의 비즈니스 규칙을 구현합니다.
//!
//! # Features
//!
//! - 사용자명/이메일 중복 사전 검사
//! - SHA-256 비밀번호 다이제스트
//! - 빈 필드를 "변경 없음"으로 해석하는 부분 수정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let response = user_service.create_user(&ctx, request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
