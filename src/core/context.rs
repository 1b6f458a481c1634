//! 요청 컨텍스트
//!
//! 리포지토리와 서비스의 모든 연산은 `RequestContext`를 받습니다. 인메모리 저장소는
//! 블로킹 I/O가 없어 컨텍스트를 직접 검사하지 않지만, 영속 백엔드로 교체할 때
//! 호출부를 바꾸지 않고 취소/타임아웃을 전파할 수 있도록 전 계층에 전달합니다.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// 요청 ID 헤더 이름
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 요청 단위 실행 컨텍스트
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Uuid,
    cancellation: CancellationToken,
}

impl RequestContext {
    /// 새 요청 ID로 컨텍스트를 생성합니다.
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4())
    }

    /// 주어진 요청 ID로 컨텍스트를 생성합니다.
    pub fn with_request_id(request_id: Uuid) -> Self {
        Self {
            request_id,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// 취소 토큰. 복제본을 취소하면 이 컨텍스트도 취소된 것으로 보입니다.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// `x-request-id` 헤더가 UUID로 파싱되면 그 값을, 아니면 새 ID를 사용합니다.
    pub fn from_http_request(req: &HttpRequest) -> Self {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .unwrap_or_else(Uuid::new_v4);

        Self::with_request_id(request_id)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}
