//! Authentication service - registration, credential verification, and
//! token issuance.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult};
use domain::{LoginUser, NewCredential, RegisteredUser};
use store::CredentialStore;

use super::password::PasswordHasher;
use super::token::{Claims, TokenSigner};

/// Response returned after successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    /// Signed JWT access token
    pub access_token: String,
    /// Authenticated user
    pub user: LoginUser,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return its public projection.
    async fn register(
        &self,
        email: String,
        password: String,
        name: String,
        professional_card: String,
    ) -> AppResult<RegisteredUser>;

    /// Login and return a signed token with the user.
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;
}

/// Concrete implementation of AuthService.
///
/// All collaborators are injected; the service keeps no mutable state and
/// each call makes at most one store round trip.
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    signer: Arc<dyn TokenSigner>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            store,
            hasher,
            signer,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        email: String,
        password: String,
        name: String,
        professional_card: String,
    ) -> AppResult<RegisteredUser> {
        let password_hash = self.hasher.hash(&password)?;

        // No uniqueness pre-check: the database constraint decides, and a
        // duplicate email surfaces as the storage failure it raises.
        let credential = self
            .store
            .create(NewCredential {
                email,
                password_hash,
                name,
                professional_card,
            })
            .await?;

        info!(user_id = credential.id, "user registered");
        Ok(credential.to_registered())
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        // Unknown email returns the same error as a wrong password; the
        // hash comparison is skipped entirely when no record exists.
        let credential = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !self.hasher.verify(&password, &credential.password_hash) {
            return Err(AppError::Unauthorized);
        }

        let token = self.signer.sign(&Claims {
            sub: credential.id,
            email: credential.email.clone(),
        })?;

        info!(user_id = credential.id, "user logged in");
        Ok(LoginResponse {
            access_token: token,
            user: credential.to_login_user(),
        })
    }
}
