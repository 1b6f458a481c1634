//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 trait으로 정의되고, 구현체는 `main`에서 생성되어 서비스에 주입됩니다.
//! 전역 인스턴스는 두지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo = InMemoryUserRepository::new();
//! let user = repo.find_by_email(&ctx, "user@example.com").await?;
//! ```

pub mod users;
