//! 서버 및 데이터 저장소 설정 관리 모듈
//!
//! HTTP 서버 바인딩/타임아웃과 저장소 관련 설정을 관리합니다.
//! 모든 값은 `lookup` 함수로 읽으며, 파싱할 수 없는 값은 경고 후 기본값을 사용합니다.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::string_utils::parse_duration;

/// 서버 설정
///
/// | 환경 변수 | 기본값 |
/// |-----------|--------|
/// | `HOST` | `0.0.0.0` |
/// | `SERVER_PORT` | `8080` |
/// | `SERVER_READ_TIMEOUT` | `15s` |
/// | `SERVER_WRITE_TIMEOUT` | `15s` |
/// | `SERVER_IDLE_TIMEOUT` | `60s` |
/// | `SERVER_SHUTDOWN_TIMEOUT` | `15s` |
/// | `SERVER_WORKERS` | `4` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
    /// 요청 헤더 수신 제한 시간
    pub read_timeout: Duration,
    /// 응답 전송 후 연결 종료 대기 시간
    pub write_timeout: Duration,
    /// keep-alive 유지 시간
    pub idle_timeout: Duration,
    /// 종료 신호 후 진행 중인 요청을 기다리는 시간
    pub shutdown_timeout: Duration,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: "8080".to_string(),
            read_timeout: Duration::from_secs(15),
            write_timeout: Duration::from_secs(15),
            idle_timeout: Duration::from_secs(60),
            shutdown_timeout: Duration::from_secs(15),
            workers: 4,
        }
    }
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("SERVER_PORT").unwrap_or(defaults.port),
            read_timeout: duration_or(lookup, "SERVER_READ_TIMEOUT", defaults.read_timeout),
            write_timeout: duration_or(lookup, "SERVER_WRITE_TIMEOUT", defaults.write_timeout),
            idle_timeout: duration_or(lookup, "SERVER_IDLE_TIMEOUT", defaults.idle_timeout),
            shutdown_timeout: duration_or(
                lookup,
                "SERVER_SHUTDOWN_TIMEOUT",
                defaults.shutdown_timeout,
            ),
            workers: parsed_or(lookup, "SERVER_WORKERS", defaults.workers),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 데이터 저장소 설정
///
/// 현재 저장소는 인메모리이므로 값은 기동 로그에만 쓰입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 영속 백엔드의 커넥션 풀 크기 (`DB_MAX_CONNECTIONS`, 기본값 10)
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { max_connections: 10 }
    }
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            max_connections: parsed_or(lookup, "DB_MAX_CONNECTIONS", Self::default().max_connections),
        }
    }
}

/// 값을 `T`로 파싱하고, 실패하면 경고를 남기고 기본값을 반환합니다.
pub(crate) fn parsed_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::warn!("{} 파싱 실패 ({:?}): {}. 기본값 {} 사용", key, raw, e, default);
            default
        }),
        None => default,
    }
}

/// 기간 문자열을 파싱하고, 실패하면 경고를 남기고 기본값을 반환합니다.
pub(crate) fn duration_or<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_duration(&raw).unwrap_or_else(|| {
            log::warn!("{} 파싱 실패 ({:?}). 기본값 {:?} 사용", key, raw, default);
            default
        }),
        None => default,
    }
}
