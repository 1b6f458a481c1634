//! 패닉 복구 미들웨어
//!
//! 핸들러(또는 내부 미들웨어)에서 발생한 패닉을 잡아 500 JSON 응답으로 변환합니다.
//! 패닉이 워커 밖으로 전파되지 않으므로 연결은 정상 응답으로 종료됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::recovery_inner::RecoveryMiddlewareService;

/// 패닉 복구 미들웨어
///
/// 패닉이 발생하면 응답이 담긴 `actix_web::Error`를 반환하며, 본문은 다음과 같습니다.
///
/// ```json
/// {"error": "Internal Server Error", "message": "An unexpected error occurred"}
/// ```
///
/// # 사용 예제
///
/// ```rust,ignore
/// App::new()
///     .wrap(RecoveryMiddleware::new())
///     .configure(configure_all_routes)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveryMiddleware;

impl RecoveryMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RecoveryMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RecoveryMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RecoveryMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
