//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 요청 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "username": "alice",
///   "email": "a@x.com",
///   "password": "p1",
///   "first_name": "Alice",
///   "last_name": "Kim"
/// }
/// ```
///
/// 사용자명과 이메일은 비어 있을 수 없습니다. 중복 여부는 서비스와
/// 리포지토리에서 검사합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자명 (비어 있을 수 없음)
    #[validate(length(min = 1, message = "사용자명은 비어 있을 수 없습니다"))]
    pub username: String,

    /// 이메일 주소 (비어 있을 수 없음)
    #[validate(length(min = 1, message = "이메일은 비어 있을 수 없습니다"))]
    pub email: String,

    /// 평문 비밀번호. 저장 전에 다이제스트로 변환됩니다.
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_is_rejected() {
        let request = CreateUserRequest {
            username: String::new(),
            email: "a@x.com".to_string(),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_long_values_are_accepted() {
        let request = CreateUserRequest {
            username: "u".repeat(500),
            email: format!("{}@x.com", "e".repeat(500)),
            first_name: Some("f".repeat(500)),
            ..Default::default()
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_minimal_request_is_valid() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"username":"alice","email":"b@x.com"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert!(request.password.is_empty());
        assert_eq!(request.first_name, None);
    }
}
