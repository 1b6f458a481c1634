//! # 사용자 관리 서비스 구현
//!
//! 사용자 CRUD의 비즈니스 규칙을 담당합니다. HTTP와 JSON을 알지 못하며,
//! 리포지토리 추상화에만 의존합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │     Create      │  │     Update      │  │  Query / Delete │  │
//! │  │ • Input Valid   │  │ • Fetch Current │  │ • By ID / All   │  │
//! │  │ • Duplicate Chk │  │ • Duplicate Chk │  │ • Entity to DTO │  │
//! │  │ • Password Hash │  │ • Merge Fields  │  │ • NotFound Prop │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Arc<dyn UserRepository>                         │
//! │ • Atomic uniqueness re-check under write lock                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 중복 검사 2단계
//!
//! 1. **서비스 사전 검사**: `find_by_username`/`find_by_email`로 먼저 확인하여 어느 필드가
//!    중복인지 알려주는 `AlreadyExists { field }`를 반환
//! 2. **리포지토리 재검사**: 사전 검사와 쓰기 사이에 다른 요청이 끼어든 경우 리포지토리가
//!    쓰기 잠금 안에서 `ConflictError`를 반환

use std::sync::Arc;

use validator::Validate;

use crate::{
    core::{
        context::RequestContext,
        errors::{AppError, AppResult, UniqueField},
    },
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateUserRequest},
            response::UserResponse,
        },
        entities::users::user::User,
    },
    repositories::users::user_repo::UserRepository,
    utils::password::hash_password,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소는 생성 시점에 주입되며, 서비스 자체는 상태를 갖지 않아 워커 간에
/// `web::Data`로 공유됩니다.
///
/// ```rust,ignore
/// let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
/// let service = UserService::new(repo);
///
/// let created = service.create_user(&ctx, request).await?;
/// let fetched = service.get_user(&ctx, created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 전체 사용자 목록 (리포지토리 순서 유지)
    pub async fn list_users(&self, ctx: &RequestContext) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all(ctx).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 (비밀번호 다이제스트 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn get_user(&self, ctx: &RequestContext, id: u64) -> AppResult<UserResponse> {
        let user = self.user_repo.find_by_id(ctx, id).await?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **입력 검증**: 사용자명/이메일이 비어 있으면 `ValidationError`
    /// 2. **사전 중복 검사**: 사용자명, 이메일 순으로 확인하여 `AlreadyExists`
    /// 3. **엔티티 생성**: 비밀번호 다이제스트, `created_at = updated_at = now`
    /// 4. **저장**: 리포지토리 충돌은 일반적인 생성 실패(`ConflictError`)로 보고
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 할당된 ID를 포함한 사용자 정보
    /// * `Err(AppError::ValidationError)` - 입력값 검증 실패
    /// * `Err(AppError::AlreadyExists)` - 사전 검사에서 중복 발견
    /// * `Err(AppError::ConflictError)` - 저장 시점에 중복 발견
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        request: CreateUserRequest,
    ) -> AppResult<UserResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        self.ensure_available(ctx, UniqueField::Username, &request.username, None)
            .await?;
        self.ensure_available(ctx, UniqueField::Email, &request.email, None)
            .await?;

        let user = User::new_local(
            request.username,
            request.email,
            hash_password(&request.password),
            request.first_name,
            request.last_name,
        );

        let created = self.user_repo.create(ctx, user).await.map_err(|e| match e {
            AppError::ConflictError(detail) => {
                log::warn!("[{}] 사용자 저장 중 충돌: {}", ctx.request_id(), detail);
                AppError::ConflictError("failed to create user".to_string())
            }
            other => other,
        })?;

        log::info!(
            "[{}] 사용자 생성 완료: id={}, username={}",
            ctx.request_id(),
            created.id,
            created.username
        );

        Ok(UserResponse::from(created))
    }

    /// 사용자 부분 수정
    ///
    /// 요청에서 비어 있지 않은 필드만 반영합니다. 비밀번호가 주어지면 다시
    /// 다이제스트하며, `updated_at`은 변경 필드가 없어도 항상 갱신합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 수정된 사용자 정보
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    /// * `Err(AppError::AlreadyExists)` - 다른 사용자가 사용 중인 사용자명/이메일
    /// * `Err(AppError::ConflictError)` - 저장 시점에 중복 발견
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        id: u64,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let mut user = self.user_repo.find_by_id(ctx, id).await?;

        if let Some(username) = request.username() {
            if username != user.username {
                self.ensure_available(ctx, UniqueField::Username, username, Some(id))
                    .await?;
            }
            user.username = username.to_string();
        }

        if let Some(email) = request.email() {
            if email != user.email {
                self.ensure_available(ctx, UniqueField::Email, email, Some(id))
                    .await?;
            }
            user.email = email.to_string();
        }

        if let Some(password) = request.password() {
            user.password_hash = hash_password(password);
        }
        if let Some(first_name) = request.first_name() {
            user.first_name = Some(first_name.to_string());
        }
        if let Some(last_name) = request.last_name() {
            user.last_name = Some(last_name.to_string());
        }

        user.touch();

        let updated = self.user_repo.update(ctx, user).await?;
        log::info!("[{}] 사용자 수정 완료: id={}", ctx.request_id(), updated.id);

        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제
    pub async fn delete_user(&self, ctx: &RequestContext, id: u64) -> AppResult<()> {
        self.user_repo.delete(ctx, id).await?;
        log::info!("[{}] 사용자 삭제 완료: id={}", ctx.request_id(), id);

        Ok(())
    }

    /// 값이 `owner` 이외의 사용자에게 점유되어 있으면 `AlreadyExists`를 반환합니다.
    async fn ensure_available(
        &self,
        ctx: &RequestContext,
        field: UniqueField,
        value: &str,
        owner: Option<u64>,
    ) -> AppResult<()> {
        let found = match field {
            UniqueField::Username => self.user_repo.find_by_username(ctx, value).await,
            UniqueField::Email => self.user_repo.find_by_email(ctx, value).await,
        };

        match found {
            Ok(existing) if Some(existing.id) != owner => {
                Err(AppError::AlreadyExists { field })
            }
            Ok(_) | Err(AppError::NotFound(_)) => Ok(()),
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::repositories::users::user_repo::InMemoryUserRepository;
    use crate::utils::password::verify_password;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn create_request(username: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_user_lifecycle_scenario() {
        let service = service();
        let ctx = RequestContext::new();

        let alice = service
            .create_user(&ctx, create_request("alice", "a@x.com", "p1"))
            .await
            .unwrap();
        assert_eq!(alice.id, 1);

        let duplicate = service
            .create_user(&ctx, create_request("alice", "b@x.com", "p2"))
            .await;
        assert_eq!(
            duplicate.unwrap_err(),
            AppError::AlreadyExists { field: UniqueField::Username }
        );

        let updated = service
            .update_user(
                &ctx,
                1,
                UpdateUserRequest {
                    email: Some("a2@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.email, "a2@x.com");

        service.delete_user(&ctx, 1).await.unwrap();
        assert!(matches!(service.get_user(&ctx, 1).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_checks_username_before_email() {
        let service = service();
        let ctx = RequestContext::new();
        service
            .create_user(&ctx, create_request("alice", "a@x.com", "p1"))
            .await
            .unwrap();

        let both = service
            .create_user(&ctx, create_request("alice", "a@x.com", "p1"))
            .await;
        let email_only = service
            .create_user(&ctx, create_request("bob", "a@x.com", "p1"))
            .await;

        assert_eq!(both.unwrap_err(), AppError::AlreadyExists { field: UniqueField::Username });
        assert_eq!(email_only.unwrap_err(), AppError::AlreadyExists { field: UniqueField::Email });
    }

    #[tokio::test]
    async fn test_create_rejects_empty_identity_fields() {
        let service = service();
        let ctx = RequestContext::new();

        let no_username = service.create_user(&ctx, create_request("", "a@x.com", "p1")).await;
        let no_email = service.create_user(&ctx, create_request("alice", "", "p1")).await;

        assert!(matches!(no_username, Err(AppError::ValidationError(_))));
        assert!(matches!(no_email, Err(AppError::ValidationError(_))));
        assert!(service.list_users(&ctx).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_sets_timestamps_and_digest() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());
        let ctx = RequestContext::new();

        let created = service
            .create_user(&ctx, create_request("alice", "a@x.com", "p1"))
            .await
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let stored = repo.find_by_id(&ctx, created.id).await.unwrap();
        assert_ne!(stored.password_hash, "p1");
        assert!(verify_password(&stored.password_hash, "p1"));
    }

    #[tokio::test]
    async fn test_update_ignores_empty_fields_and_rehashes_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());
        let ctx = RequestContext::new();
        let created = service
            .create_user(
                &ctx,
                CreateUserRequest {
                    first_name: Some("Alice".to_string()),
                    ..create_request("alice", "a@x.com", "p1")
                },
            )
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let updated = service
            .update_user(
                &ctx,
                created.id,
                UpdateUserRequest {
                    username: Some(String::new()),
                    first_name: Some(String::new()),
                    last_name: Some("Kim".to_string()),
                    password: Some("p2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "alice");
        assert_eq!(updated.first_name.as_deref(), Some("Alice"));
        assert_eq!(updated.last_name.as_deref(), Some("Kim"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let stored = repo.find_by_id(&ctx, created.id).await.unwrap();
        assert!(verify_password(&stored.password_hash, "p2"));
    }

    #[tokio::test]
    async fn test_update_rejects_value_held_by_other_user() {
        let service = service();
        let ctx = RequestContext::new();
        service.create_user(&ctx, create_request("alice", "a@x.com", "p1")).await.unwrap();
        service.create_user(&ctx, create_request("bob", "b@x.com", "p1")).await.unwrap();

        let result = service
            .update_user(
                &ctx,
                2,
                UpdateUserRequest {
                    email: Some("a@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result.unwrap_err(), AppError::AlreadyExists { field: UniqueField::Email });
        assert_eq!(service.get_user(&ctx, 2).await.unwrap().email, "b@x.com");
    }

    #[tokio::test]
    async fn test_update_with_own_values_succeeds() {
        let service = service();
        let ctx = RequestContext::new();
        service.create_user(&ctx, create_request("alice", "a@x.com", "p1")).await.unwrap();

        let result = service
            .update_user(
                &ctx,
                1,
                UpdateUserRequest {
                    username: Some("alice".to_string()),
                    email: Some("a@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_user_operations_are_not_found() {
        let service = service();
        let ctx = RequestContext::new();

        assert!(matches!(service.get_user(&ctx, 9).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_user(&ctx, 9).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update_user(&ctx, 9, UpdateUserRequest::default()).await,
            Err(AppError::NotFound(_))
        ));
    }

    /// 사전 검사를 통과시키고 쓰기 시점에만 충돌을 보고하는 리포지토리
    struct RacingRepository {
        inner: InMemoryUserRepository,
    }

    #[async_trait]
    impl UserRepository for RacingRepository {
        async fn find_all(&self, ctx: &RequestContext) -> AppResult<Vec<User>> {
            self.inner.find_all(ctx).await
        }

        async fn find_by_id(&self, ctx: &RequestContext, id: u64) -> AppResult<User> {
            self.inner.find_by_id(ctx, id).await
        }

        async fn find_by_username(&self, _ctx: &RequestContext, username: &str) -> AppResult<User> {
            Err(AppError::NotFound(username.to_string()))
        }

        async fn find_by_email(&self, _ctx: &RequestContext, email: &str) -> AppResult<User> {
            Err(AppError::NotFound(email.to_string()))
        }

        async fn create(&self, ctx: &RequestContext, user: User) -> AppResult<User> {
            self.inner.create(ctx, user).await
        }

        async fn update(&self, ctx: &RequestContext, user: User) -> AppResult<User> {
            self.inner.update(ctx, user).await
        }

        async fn delete(&self, ctx: &RequestContext, id: u64) -> AppResult<()> {
            self.inner.delete(ctx, id).await
        }
    }

    #[tokio::test]
    async fn test_repository_conflict_surfaces_as_creation_failure() {
        let service = UserService::new(Arc::new(RacingRepository {
            inner: InMemoryUserRepository::new(),
        }));
        let ctx = RequestContext::new();
        service.create_user(&ctx, create_request("alice", "a@x.com", "p1")).await.unwrap();

        let result = service
            .create_user(&ctx, create_request("alice", "b@x.com", "p1"))
            .await;

        assert_eq!(
            result.unwrap_err(),
            AppError::ConflictError("failed to create user".to_string())
        );
    }

    #[tokio::test]
    async fn test_repository_conflict_on_update_propagates() {
        let service = UserService::new(Arc::new(RacingRepository {
            inner: InMemoryUserRepository::new(),
        }));
        let ctx = RequestContext::new();
        service.create_user(&ctx, create_request("alice", "a@x.com", "p1")).await.unwrap();
        service.create_user(&ctx, create_request("bob", "b@x.com", "p1")).await.unwrap();

        let result = service
            .update_user(
                &ctx,
                2,
                UpdateUserRequest {
                    username: Some("alice".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(service.get_user(&ctx, 2).await.unwrap().username, "bob");
    }
}
