//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//! 엔티티를 그대로 노출하지 않고, 서비스 경계를 넘는 데이터만 담습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   ├── create_user.rs         # 사용자 생성 요청
//! │   └── update_user.rs         # 사용자 부분 수정 요청
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs       # 사용자 응답 (비밀번호 다이제스트 제외)
//! ```

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, UpdateUserRequest};
pub use response::UserResponse;
