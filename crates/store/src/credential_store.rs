//! Credential store trait and SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{Credential, NewCredential};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential store trait for dependency injection.
///
/// Any call may fail (connectivity, missing schema, constraint
/// violations); callers decide whether such failures are fatal or are
/// degraded into a fallback value.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persist a new credential record.
    ///
    /// The email uniqueness constraint is enforced by the database; a
    /// duplicate surfaces as a storage error, not as a pre-checked
    /// conflict.
    async fn create(&self, credential: NewCredential) -> AppResult<Credential>;

    /// Find a credential record by exact email match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credential>>;

    /// Fetch all credential records in storage order.
    async fn find_all(&self) -> AppResult<Vec<Credential>>;
}

/// Concrete implementation of CredentialStore backed by SeaORM.
pub struct SqlCredentialStore {
    db: DatabaseConnection,
}

impl SqlCredentialStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for SqlCredentialStore {
    async fn create(&self, credential: NewCredential) -> AppResult<Credential> {
        let active_model = ActiveModel {
            email: Set(credential.email),
            password_hash: Set(credential.password_hash),
            name: Set(credential.name),
            professional_card: Set(credential.professional_card),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Credential::from(model))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credential>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Credential::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Credential>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Credential::from).collect())
    }
}
