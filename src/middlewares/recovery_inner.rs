//! RecoveryMiddleware 패닉 포착 로직
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::{Error, HttpResponse};
use futures_util::future::{FutureExt, LocalBoxFuture};

pub struct RecoveryMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RecoveryMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        // HttpRequest를 복제하면 라우터가 match_info를 수정할 수 없으므로 로그용 값만 복사
        let method = req.method().to_string();
        let path = req.path().to_string();

        Box::pin(async move {
            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| service.call(req))) {
                Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
                Err(payload) => Err(payload),
            };

            outcome.unwrap_or_else(|payload| {
                log::error!(
                    "요청 처리 중 패닉 발생: {} {} - {}",
                    method,
                    path,
                    panic_message(payload.as_ref())
                );

                let response = HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal Server Error",
                    "message": "An unexpected error occurred"
                }));
                Err(InternalError::from_response("panic", response).into())
            })
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}
