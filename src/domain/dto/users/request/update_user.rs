//! 사용자 수정 요청 DTO

use serde::{Deserialize, Serialize};

/// 사용자 부분 수정 요청 DTO
///
/// 필드가 없거나 빈 문자열이면 "변경하지 않음"으로 해석합니다.
/// 따라서 이 요청으로는 어떤 필드도 빈 문자열로 바꿀 수 없습니다.
///
/// ```json
/// { "email": "a2@x.com" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl UpdateUserRequest {
    pub fn username(&self) -> Option<&str> {
        provided(&self.username)
    }

    pub fn email(&self) -> Option<&str> {
        provided(&self.email)
    }

    pub fn password(&self) -> Option<&str> {
        provided(&self.password)
    }

    pub fn first_name(&self) -> Option<&str> {
        provided(&self.first_name)
    }

    pub fn last_name(&self) -> Option<&str> {
        provided(&self.last_name)
    }
}

/// 값이 있고 비어 있지 않을 때만 반환
fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
