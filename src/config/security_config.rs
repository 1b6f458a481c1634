//! 요청 제한 및 CORS 설정 관리 모듈

use actix_cors::Cors;
use actix_web::http::header;

use crate::config::data_config::parsed_or;

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

impl RateLimitConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            per_second: parsed_or(lookup, "RATE_LIMIT_PER_SECOND", defaults.per_second),
            burst_size: parsed_or(lookup, "RATE_LIMIT_BURST_SIZE", defaults.burst_size),
        }
    }
}

/// CORS 설정
///
/// `CORS_ALLOWED_ORIGINS`는 쉼표로 구분된 Origin 목록입니다.
/// 기본값은 `http://localhost:3000,http://localhost:8080`입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8080".to_string(),
            ],
        }
    }
}

impl CorsConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => Self {
                allowed_origins: raw
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
            None => Self::default(),
        }
    }

    /// CORS 미들웨어를 구성합니다
    ///
    /// 워커마다 호출되므로 `HttpServer::new` 클로저 안에서 사용합니다.
    pub fn build(&self) -> Cors {
        self.allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::ACCEPT,
                header::CONTENT_TYPE,
                header::HeaderName::from_static("x-request-id"),
            ])
            .max_age(3600)
    }
}
