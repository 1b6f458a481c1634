use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 다이제스트를 제외한 모든 사용자 필드입니다. 값이 없는 이름 필드는 `null`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            first_name,
            last_name,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_never_carries_password_hash() {
        let user = User::new_local(
            "alice".to_string(),
            "a@x.com".to_string(),
            "digest".to_string(),
            Some("Alice".to_string()),
            None,
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["first_name"], "Alice");
        assert_eq!(json.get("last_name"), Some(&serde_json::Value::Null));
    }
}
