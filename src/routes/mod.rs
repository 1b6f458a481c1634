//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 `/api/v1` 스코프 아래에 등록됩니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트 (`/api/v1/users`)
//! - 헬스체크 엔드포인트 (`/api/v1/health`)
//! - JSON 본문 파싱 실패를 `{"error": ...}` 400 응답으로 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

use crate::{core::errors::AppError, handlers};

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(
        web::scope("/api/v1")
            .service(health_check)
            .configure(configure_user_routes),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /api/v1/users` - 사용자 목록
/// - `POST /api/v1/users` - 사용자 생성
/// - `GET /api/v1/users/{id}` - 사용자 조회
/// - `PUT /api/v1/users/{id}` - 사용자 수정
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// JSON 추출기 설정
///
/// 잘못된 본문은 actix 기본 텍스트 응답 대신 `AppError::ValidationError`로 변환됩니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        log::debug!("잘못된 JSON 본문: {} {} - {}", req.method(), req.path(), err);
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/api/v1/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "message": "API is healthy",
///   "service": "user_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "message": "API is healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
