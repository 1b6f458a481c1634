//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new_local(
//!     "alice".to_string(),
//!     "a@x.com".to_string(),
//!     password::hash_password("p1"),
//!     None,
//!     None,
//! );
//! ```

pub mod user;

pub use user::User;
