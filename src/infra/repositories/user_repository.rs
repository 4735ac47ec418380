//! ABHA user repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::AbhaUser;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ABHA ID
    async fn find_by_abha_id(&self, abha_id: &str) -> AppResult<Option<AbhaUser>>;

    /// Find the user matching BOTH abha_id and phone (login credential check)
    async fn find_by_credentials(&self, abha_id: &str, phone: &str)
        -> AppResult<Option<AbhaUser>>;

    /// Count all users
    async fn count(&self) -> AppResult<u64>;

    /// Insert a new user
    async fn insert(&self, user: AbhaUser) -> AppResult<AbhaUser>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_abha_id(&self, abha_id: &str) -> AppResult<Option<AbhaUser>> {
        let result = UserEntity::find()
            .filter(user::Column::AbhaId.eq(abha_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AbhaUser::from))
    }

    async fn find_by_credentials(
        &self,
        abha_id: &str,
        phone: &str,
    ) -> AppResult<Option<AbhaUser>> {
        let result = UserEntity::find()
            .filter(user::Column::AbhaId.eq(abha_id))
            .filter(user::Column::Phone.eq(phone))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AbhaUser::from))
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn insert(&self, user: AbhaUser) -> AppResult<AbhaUser> {
        let active_model = ActiveModel {
            abha_id: Set(user.abha_id),
            name: Set(user.name),
            email: Set(user.email),
            phone: Set(user.phone),
            dob: Set(user.dob),
            gender: Set(user.gender),
            address: Set(user.address),
            created_at: Set(user.created_at),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(AbhaUser::from(model))
    }
}
