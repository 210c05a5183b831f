//! Password hashing seam.
//!
//! A trait rather than a value object so the hasher is an injected
//! collaborator: tests can observe exactly when verification runs.

use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Work factor for bcrypt. Matches the cost the existing records were
/// hashed with; changing it would not invalidate old hashes (the cost is
/// embedded in each hash) but keeps new ones consistent.
pub const HASH_COST: u32 = 10;

/// One-way password hashing and verification.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted one-way hash of the plaintext.
    fn hash(&self, plain_text: &str) -> AppResult<String>;

    /// Verify a plaintext against a stored hash.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}

/// Bcrypt-backed hasher with a fixed work factor.
#[derive(Debug, Clone, Default)]
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain_text: &str) -> AppResult<String> {
        bcrypt::hash(plain_text, HASH_COST)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        // A malformed stored hash verifies as a mismatch
        bcrypt::verify(plain_text, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hasher = BcryptHasher;
        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert!(hasher.verify("correct horse battery staple", &hash));
        assert!(!hasher.verify("wrong password", &hash));
    }

    #[test]
    fn hash_never_contains_plaintext() {
        let hasher = BcryptHasher;
        let hash = hasher.hash("hunter2hunter2").unwrap();
        assert!(!hash.contains("hunter2"));
    }

    #[test]
    fn same_password_different_salts() {
        let hasher = BcryptHasher;
        let first = hasher.hash("repeatable").unwrap();
        let second = hasher.hash("repeatable").unwrap();

        // Different salts produce different hashes
        assert_ne!(first, second);
        // But both verify correctly
        assert!(hasher.verify("repeatable", &first));
        assert!(hasher.verify("repeatable", &second));
    }

    #[test]
    fn malformed_hash_fails_verification() {
        let hasher = BcryptHasher;
        assert!(!hasher.verify("anything", "not-a-bcrypt-hash"));
    }
}
