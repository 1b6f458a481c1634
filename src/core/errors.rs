//! # Application Error Handling System
//!
//! 사용자 서비스 전 계층(리포지토리, 서비스, 핸들러)이 공유하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 한 번으로 적절한 HTTP 응답이 만들어지도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 ID, 요청 본문 검증 실패 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 |
//! | `ConflictError` | 400 Bad Request | 리포지토리 쓰기 시점의 유니크 제약 위반 |
//! | `AlreadyExists` | 400 Bad Request | 서비스 사전 검사에서 발견된 중복 (필드 명시) |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 중복 계열 에러는 기존 클라이언트 계약에 맞춰 409가 아닌 400으로 응답합니다.

use std::fmt;

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// 유니크 제약이 걸린 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UniqueField {
    Username,
    Email,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Username => write!(f, "username"),
            UniqueField::Email => write!(f, "email"),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 코어(리포지토리/서비스)는 이 타입으로만 실패를 보고하며 패닉하지 않습니다.
///
/// ## 에러 카테고리
///
/// - `ValidationError`: 호출자가 넘긴 값 자체가 잘못됨 (숫자가 아닌 ID 등)
/// - `NotFound`: 요청한 ID의 레코드가 없음
/// - `ConflictError`: 리포지토리가 쓰기 시점에 원자적으로 검출한 중복
/// - `AlreadyExists`: 서비스가 사전 검사로 검출한 중복, 어느 필드인지 포함
/// - `InternalError`: 호스트 계층의 예상치 못한 오류
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (400 Bad Request)
    ///
    /// 리포지토리가 배타적 잠금 안에서 검출한 유니크 제약 위반입니다.
    /// 이 에러가 반환되면 저장소는 변경되지 않은 상태입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 중복 필드 에러 (400 Bad Request)
    ///
    /// 서비스 계층의 사전 검사 결과입니다. 사전 검사와 실제 쓰기 사이에
    /// 다른 요청이 끼어들면 이 에러 대신 `ConflictError`가 반환될 수 있습니다.
    #[error("{field} already exists")]
    AlreadyExists { field: UniqueField },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자 ID에 대한 표준 NotFound 에러
    pub fn user_not_found(id: u64) -> Self {
        AppError::NotFound(format!("사용자를 찾을 수 없습니다 (id: {})", id))
    }

    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::AlreadyExists { .. } => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따르며, 5xx 에러는
    /// 서버 로그에만 상세 내용을 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
