//! Authentication service business logic.

mod auth_service;
mod password;
mod token;

pub use auth_service::{AuthService, Authenticator, LoginResponse};
pub use password::{BcryptHasher, PasswordHasher};
pub use token::{Claims, JwtSigner, TokenSigner};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use token::MockTokenSigner;
