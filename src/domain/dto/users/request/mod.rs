//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 DTO들을 정의합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 필수 값, 길이 제한 (`validator`)
//! 3. **비즈니스 검증**: 중복 확인 (서비스/리포지토리)
//!
//! 검증 실패는 `AppError::ValidationError`로 변환되어 400 응답이 됩니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
