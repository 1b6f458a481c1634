//! # Data Transfer Objects Module
//!
//! HTTP 계층과 서비스 계층 사이에서 이동하는 요청/응답 타입입니다.
//! `serde`로 JSON과 변환되며, 요청 DTO는 `validator`로 형식을 검증합니다.

pub mod users;

pub use users::*;
