//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. 저장소는 [`UserRepository`] trait으로
//! 추상화되어 있으며, 기본 구현은 프로세스 메모리에 레코드를 보관하는
//! [`InMemoryUserRepository`]입니다.
//!
//! ## 특징
//!
//! - **단일 RwLock**: 읽기끼리는 동시에, 쓰기는 다른 모든 연산과 배타적으로 실행
//! - **유니크 인덱스**: username/email → id 해시 인덱스로 O(1) 조회와 충돌 검사
//! - **단조 증가 ID**: 삭제된 ID는 재사용하지 않으며, 충돌로 실패한 생성은 ID를 소비하지 않음
//! - **값 복사 반환**: 호출자는 저장소 내부 레코드를 직접 참조하지 않음

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    core::{
        context::RequestContext,
        errors::{AppError, AppResult},
    },
    domain::entities::users::user::User,
};

/// 사용자 저장소 추상화
///
/// 모든 메서드는 [`RequestContext`]를 받습니다. 인메모리 구현은 이를 사용하지 않지만
/// 영속 백엔드는 취소 전파에 사용할 수 있습니다.
///
/// ## 에러 계약
///
/// - 조회 실패: `AppError::NotFound`
/// - 유니크 제약 위반: `AppError::ConflictError` (저장소는 변경되지 않음)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 모든 사용자의 스냅샷 (ID 오름차순)
    async fn find_all(&self, ctx: &RequestContext) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, ctx: &RequestContext, id: u64) -> AppResult<User>;

    async fn find_by_username(&self, ctx: &RequestContext, username: &str) -> AppResult<User>;

    async fn find_by_email(&self, ctx: &RequestContext, email: &str) -> AppResult<User>;

    /// 새 ID를 할당하여 저장하고, 저장된 레코드를 반환합니다.
    ///
    /// 입력 레코드의 `id`는 무시됩니다.
    async fn create(&self, ctx: &RequestContext, user: User) -> AppResult<User>;

    /// `user.id`의 레코드를 통째로 교체합니다.
    async fn update(&self, ctx: &RequestContext, user: User) -> AppResult<User>;

    async fn delete(&self, ctx: &RequestContext, id: u64) -> AppResult<()>;
}

/// 잠금으로 보호되는 저장소 상태
///
/// `by_username`과 `by_email`은 항상 `users`와 같은 레코드 집합을 가리킵니다.
#[derive(Debug)]
struct UserStore {
    users: BTreeMap<u64, User>,
    by_username: HashMap<String, u64>,
    by_email: HashMap<String, u64>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            by_username: HashMap::new(),
            by_email: HashMap::new(),
            next_id: 1,
        }
    }
}

impl UserStore {
    /// `exclude` 이외의 레코드가 username/email을 점유하고 있는지 검사합니다.
    fn check_unique(&self, user: &User, exclude: Option<u64>) -> AppResult<()> {
        let held_by_other = |index: &HashMap<String, u64>, key: &str| {
            index
                .get(key)
                .is_some_and(|owner| Some(*owner) != exclude)
        };

        if held_by_other(&self.by_username, &user.username) {
            return Err(AppError::ConflictError(format!(
                "username '{}' is already taken",
                user.username
            )));
        }
        if held_by_other(&self.by_email, &user.email) {
            return Err(AppError::ConflictError(format!(
                "email '{}' is already taken",
                user.email
            )));
        }

        Ok(())
    }
}

/// 인메모리 사용자 리포지토리
///
/// 프로세스 수명 동안만 데이터를 유지합니다. `Arc`로 감싸 서비스에 주입합니다.
///
/// ```rust,ignore
/// let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
/// let service = UserService::new(repo);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self, _ctx: &RequestContext) -> AppResult<Vec<User>> {
        let store = self.store.read().await;

        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, _ctx: &RequestContext, id: u64) -> AppResult<User> {
        let store = self.store.read().await;

        store
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::user_not_found(id))
    }

    async fn find_by_username(&self, _ctx: &RequestContext, username: &str) -> AppResult<User> {
        let store = self.store.read().await;

        store
            .by_username
            .get(username)
            .and_then(|id| store.users.get(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("username '{}'", username)))
    }

    async fn find_by_email(&self, _ctx: &RequestContext, email: &str) -> AppResult<User> {
        let store = self.store.read().await;

        store
            .by_email
            .get(email)
            .and_then(|id| store.users.get(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("email '{}'", email)))
    }

    async fn create(&self, ctx: &RequestContext, mut user: User) -> AppResult<User> {
        let mut store = self.store.write().await;

        store.check_unique(&user, None)?;

        user.id = store.next_id;
        store.next_id += 1;

        store.by_username.insert(user.username.clone(), user.id);
        store.by_email.insert(user.email.clone(), user.id);
        store.users.insert(user.id, user.clone());

        log::debug!("[{}] 사용자 저장: id={}", ctx.request_id(), user.id);
        Ok(user)
    }

    async fn update(&self, ctx: &RequestContext, user: User) -> AppResult<User> {
        let mut store = self.store.write().await;

        let (old_username, old_email) = match store.users.get(&user.id) {
            Some(existing) => (existing.username.clone(), existing.email.clone()),
            None => return Err(AppError::user_not_found(user.id)),
        };

        store.check_unique(&user, Some(user.id))?;

        if old_username != user.username {
            store.by_username.remove(&old_username);
            store.by_username.insert(user.username.clone(), user.id);
        }
        if old_email != user.email {
            store.by_email.remove(&old_email);
            store.by_email.insert(user.email.clone(), user.id);
        }
        store.users.insert(user.id, user.clone());

        log::debug!("[{}] 사용자 교체: id={}", ctx.request_id(), user.id);
        Ok(user)
    }

    async fn delete(&self, ctx: &RequestContext, id: u64) -> AppResult<()> {
        let mut store = self.store.write().await;

        let removed = store
            .users
            .remove(&id)
            .ok_or_else(|| AppError::user_not_found(id))?;
        store.by_username.remove(&removed.username);
        store.by_email.remove(&removed.email);

        log::debug!("[{}] 사용자 삭제: id={}", ctx.request_id(), id);
        Ok(())
    }
}
