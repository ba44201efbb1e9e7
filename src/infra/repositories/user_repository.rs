//! User repository backed by the `users` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every operation may fail with [`AppError::Store`]. Username uniqueness is
/// checked before insertion and backed by a unique index, so a lost
/// check-then-insert race still surfaces as [`AppError::DuplicateUsername`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in the store's natural order
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID, failing with `NotFound` when absent
    async fn get_by_id(&self, id: i64) -> AppResult<User>;

    /// Check whether a username is taken (exact, case-sensitive)
    async fn username_exists(&self, username: &str) -> AppResult<bool>;

    /// Create a new user, returning it with the store-assigned id
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Overwrite every column of an existing user except its id
    async fn update(&self, user: User) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A unique index violation on `user_name` means another row already holds it.
fn map_write_error(err: DbErr, user_name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::DuplicateUsername(user_name.to_string())
        }
        _ => AppError::Store(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&self.db).await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(AppError::NotFound(id))
    }

    async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::UserName.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        if self.username_exists(&user.user_name).await? {
            return Err(AppError::DuplicateUsername(user.user_name));
        }

        let active_model = ActiveModel {
            user_id: NotSet,
            user_name: Set(user.user_name.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            department: Set(user.department.clone()),
            user_status: Set(user.user_status.clone()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, &user.user_name))?;

        tracing::debug!(user_id = model.user_id, user_name = %user.user_name, "user created");
        Ok(User::from_new(model.user_id, user))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let existing = UserEntity::find_by_id(user.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound(user.id))?;

        let mut active: ActiveModel = existing.into();
        active.user_name = Set(user.user_name.clone());
        active.first_name = Set(user.first_name);
        active.last_name = Set(user.last_name);
        active.email = Set(user.email);
        active.department = Set(user.department);
        active.user_status = Set(user.user_status);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, &user.user_name))?;

        tracing::debug!(user_id = model.user_id, "user updated");
        Ok(User::from(model))
    }
}
