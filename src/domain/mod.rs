//! # Domain Layer Module
//!
//! 사용자 도메인의 데이터 구조를 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 보관되는 레코드
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```

pub mod dto;
pub mod entities;

