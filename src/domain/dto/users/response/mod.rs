//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 응답 DTO를 정의합니다.
//!
//! - **데이터 은닉**: 비밀번호 다이제스트는 응답에서 제외
//! - **일관성**: 목록/단건/생성/수정 응답이 모두 같은 `UserResponse`를 사용
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": 1,
//!   "username": "alice",
//!   "email": "a@x.com",
//!   "first_name": "Alice",
//!   "last_name": null,
//!   "created_at": "2024-06-01T10:00:00Z",
//!   "updated_at": "2024-06-07T12:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
