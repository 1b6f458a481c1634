//! # User Management HTTP Handlers
//!
//! 사용자 CRUD REST API 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 각 핸들러는 경로 파라미터를 파싱하고, 주입된 [`UserService`]에 위임한 뒤
//! 결과를 JSON으로 직렬화합니다. 에러는 `AppError`의 `ResponseError` 구현이
//! `{"error": "..."}` 응답으로 변환합니다.
//!
//! ## 엔드포인트 (`/api/v1/users` 스코프)
//!
//! | Method | Path | 성공 | 핸들러 |
//! |--------|------|------|--------|
//! | GET | `` | 200 | [`list_users`] |
//! | POST | `` | 201 | [`create_user`] |
//! | GET | `/{user_id}` | 200 | [`get_user`] |
//! | PUT | `/{user_id}` | 200 | [`update_user`] |
//! | DELETE | `/{user_id}` | 204 | [`delete_user`] |
//!
//! ## 서비스 주입
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(UserService::new(repo)))
//!     .configure(configure_all_routes)
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    core::{context::RequestContext, errors::AppError},
    domain::dto::users::request::{CreateUserRequest, UpdateUserRequest},
    services::users::user_service::UserService,
    utils::string_utils::parse_user_id,
};

/// 사용자 목록 조회 핸들러
///
/// `GET /api/v1/users`
///
/// 등록된 모든 사용자를 ID 오름차순으로 반환합니다. 사용자가 없으면 `[]`입니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users(&ctx).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 생성 핸들러
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "alice",
///   "email": "a@x.com",
///   "password": "p1",
///   "first_name": "Alice"
/// }
/// ```
///
/// # 응답
///
/// - `201 Created`: 생성된 사용자 (`password_hash` 제외)
/// - `400 Bad Request`: 본문 형식 오류, 빈 사용자명/이메일, 중복
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","email":"a@x.com","password":"p1"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    ctx: RequestContext,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(&ctx, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 조회 핸들러
///
/// `GET /api/v1/users/{user_id}`
///
/// - `200 OK`: 사용자 정보
/// - `400 Bad Request`: 숫자가 아닌 ID
/// - `404 Not Found`: 존재하지 않는 사용자
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    ctx: RequestContext,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;
    let user = service.get_user(&ctx, id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// `PUT /api/v1/users/{user_id}`
///
/// 부분 수정입니다. 본문에 없거나 빈 문자열인 필드는 기존 값을 유지합니다.
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/users/1 \
///   -H "Content-Type: application/json" \
///   -d '{"email":"a2@x.com"}'
/// ```
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    ctx: RequestContext,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;
    let user = service.update_user(&ctx, id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /api/v1/users/{user_id}`
///
/// 물리적 삭제이며 복구할 수 없습니다. 성공 시 `204 No Content`를 반환합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    ctx: RequestContext,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;
    service.delete_user(&ctx, id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::repositories::users::user_repo::InMemoryUserRepository;
    use crate::routes::configure_all_routes;

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())))
    }

    #[actix_web::test]
    async fn test_create_then_get_user() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "username": "alice",
                "email": "a@x.com",
                "password": "p1",
                "first_name": "Alice"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["username"], "alice");
        assert!(created.get("password").is_none());
        assert!(created.get("password_hash").is_none());

        let req = test::TestRequest::get().uri("/api/v1/users/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched["email"], "a@x.com");
        assert_eq!(fetched["first_name"], "Alice");
        assert_eq!(fetched.get("last_name"), Some(&Value::Null));
    }

    #[actix_web::test]
    async fn test_list_users_starts_empty() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_all_routes),
        )
        .await;

        for (email, expected) in [("a@x.com", StatusCode::CREATED), ("b@x.com", StatusCode::BAD_REQUEST)] {
            let req = test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "username": "alice", "email": email, "password": "p1" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);

            if expected == StatusCode::BAD_REQUEST {
                let body: Value = test::read_body_json(resp).await;
                assert_eq!(body["error"], "username already exists");
            }
        }
    }

    #[actix_web::test]
    async fn test_update_and_delete_user() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "username": "alice", "email": "a@x.com", "password": "p1" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/v1/users/1")
            .set_json(json!({ "email": "a2@x.com", "username": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["username"], "alice");
        assert_eq!(updated["email"], "a2@x.com");

        let req = test::TestRequest::delete().uri("/api/v1/users/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/v1/users/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_id_and_body_are_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("Invalid user ID"));

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_missing_user_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/v1/users/42").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
