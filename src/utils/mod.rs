//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`password`] - 비밀번호 다이제스트 생성/검증
//! - [`string_utils`] - 사용자 ID, 기간 문자열 파싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::password::{hash_password, verify_password};
//! use crate::utils::string_utils::parse_user_id;
//!
//! let digest = hash_password("p1");
//! assert!(verify_password(&digest, "p1"));
//!
//! let id = parse_user_id("42")?;
//! ```

pub mod password;
pub mod string_utils;
