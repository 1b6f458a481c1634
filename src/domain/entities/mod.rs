//! # Domain Entities Module
//!
//! 저장소에 보관되는 도메인 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장되는 레코드)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 엔티티는 내부 필드(비밀번호 다이제스트 등)를 포함하므로 HTTP 응답으로
//! 직접 직렬화하지 않습니다.

pub mod users;
