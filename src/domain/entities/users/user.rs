//! User Entity Implementation
//!
//! 리포지토리가 소유하는 사용자 레코드입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 리포지토리의 `create`/`update`/`delete`를 통해서만 변경됩니다.
/// `id`는 `create` 시점에 리포지토리가 할당하며 이후 바뀌지 않습니다.
/// `password_hash`는 서비스 경계 밖으로 나가지 않으며, 응답은 항상
/// [`UserResponse`](crate::domain::dto::users::response::UserResponse)로 변환됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 리포지토리가 할당한 ID (저장 전에는 0)
    pub id: u64,
    /// 사용자명 (unique, non-empty)
    pub username: String,
    /// 이메일 (unique, non-empty)
    pub email: String,
    /// 비밀번호 다이제스트
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 저장 전 사용자 생성
    ///
    /// `created_at`과 `updated_at`을 같은 현재 시각으로 설정합니다.
    pub fn new_local(
        username: String,
        email: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            username,
            email,
            password_hash,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// 수정 시간을 현재 시각으로 갱신
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
