//! Token signing seam.
//!
//! Signing only: nothing in this service verifies tokens, so no decoding
//! path lives here.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload.
///
/// Carries the subject identity and nothing else; no expiry claim is
/// configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
}

/// Signs a claims payload into an opaque token string.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &Claims) -> AppResult<String>;
}

/// HS256 JWT signer.
pub struct JwtSigner {
    secret: String,
}

impl JwtSigner {
    /// Create a signer with the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, claims: &Claims) -> AppResult<String> {
        let token = encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret_bytes()),
        )?;
        Ok(token)
    }
}
