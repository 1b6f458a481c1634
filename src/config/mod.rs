//! 애플리케이션 설정 모듈
//!
//! 환경 변수(및 `PROFILE`로 선택된 `.env` 파일)에서 읽은 설정을 타입으로 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("{}", config.server.bind_address());
//! ```

pub mod data_config;
pub mod security_config;

pub use data_config::*;
pub use security_config::*;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: ServerConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup),
            rate_limit: RateLimitConfig::from_lookup(lookup),
            cors: CorsConfig::from_lookup(lookup),
        }
    }
}
