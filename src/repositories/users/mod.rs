//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository) trait과 인메모리 구현
//! [`InMemoryUserRepository`](user_repo::InMemoryUserRepository)를 제공합니다.

pub mod user_repo;

pub use user_repo::{InMemoryUserRepository, UserRepository};
