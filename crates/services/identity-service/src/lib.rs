//! Identity Service Library
//!
//! Owns the authentication flow: credential registration, credential
//! verification, and token issuance. The credential store, password
//! hasher, and token signer are injected at construction so callers (and
//! tests) can substitute their own implementations.

pub mod service;

pub use service::{
    AuthService, Authenticator, BcryptHasher, Claims, JwtSigner, LoginResponse, PasswordHasher,
    TokenSigner,
};

#[cfg(any(test, feature = "test-utils"))]
pub use service::{MockPasswordHasher, MockTokenSigner};
