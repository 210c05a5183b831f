//! Credential domain entity and its public projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted credential record.
///
/// A record is created exactly once at registration and never updated or
/// deleted afterwards. The `password_hash` holds a one-way hash of the
/// password and must never reach a caller; both projections below omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub professional_card: String,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Projection returned by registration: every field except the hash.
    pub fn to_registered(&self) -> RegisteredUser {
        RegisteredUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            professional_card: self.professional_card.clone(),
            created_at: self.created_at,
        }
    }

    /// Projection returned by login.
    ///
    /// Narrower than [`RegisteredUser`]: `professional_card` and
    /// `created_at` are absent, matching the registration/login asymmetry
    /// of the existing API contract.
    pub fn to_login_user(&self) -> LoginUser {
        LoginUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Data for a credential record about to be persisted.
///
/// Carries the already-hashed password; the plaintext never crosses the
/// store boundary.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub professional_card: String,
}

/// Registration response body (safe to return to the client).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisteredUser {
    /// Unique user identifier
    pub id: i32,
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
    /// Opaque professional identifier supplied at registration
    pub professional_card: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// User shape embedded in the login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginUser {
    /// Unique user identifier
    pub id: i32,
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
}
