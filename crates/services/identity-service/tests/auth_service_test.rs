//! Auth service unit tests.
//!
//! These use mock collaborators so hashing and store calls are observable
//! without a database.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use common::AppError;
use domain::Credential;
use identity_service::{
    AuthService, Authenticator, BcryptHasher, Claims, JwtSigner, MockPasswordHasher,
    MockTokenSigner, PasswordHasher,
};
use store::MockCredentialStore;

fn stored_credential(id: i32, email: &str, password_hash: &str) -> Credential {
    Credential {
        id,
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        name: "Test User".to_string(),
        professional_card: "12345".to_string(),
        created_at: Utc::now(),
    }
}

fn static_signer() -> MockTokenSigner {
    let mut signer = MockTokenSigner::new();
    signer.expect_sign().returning(|_| Ok("jwtToken".to_string()));
    signer
}

// =============================================================================
// Register
// =============================================================================

#[tokio::test]
async fn register_hashes_password_and_returns_public_projection() {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .with(eq("password123"))
        .times(1)
        .returning(|_| Ok("hashedPassword".to_string()));

    let mut store = MockCredentialStore::new();
    store
        .expect_create()
        .withf(|new| {
            new.email == "test@example.com"
                && new.password_hash == "hashedPassword"
                && new.name == "Test User"
                && new.professional_card == "12345"
        })
        .times(1)
        .returning(|new| {
            Ok(Credential {
                id: 1,
                email: new.email,
                password_hash: new.password_hash,
                name: new.name,
                professional_card: new.professional_card,
                created_at: Utc::now(),
            })
        });

    let service = Authenticator::new(
        Arc::new(store),
        Arc::new(hasher),
        Arc::new(static_signer()),
    );

    let registered = service
        .register(
            "test@example.com".to_string(),
            "password123".to_string(),
            "Test User".to_string(),
            "12345".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(registered.id, 1);
    assert_eq!(registered.email, "test@example.com");
    assert_eq!(registered.professional_card, "12345");
}

#[tokio::test]
async fn register_response_never_exposes_password_or_hash() {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok("hashedPassword".to_string()));

    let mut store = MockCredentialStore::new();
    store.expect_create().returning(|new| {
        Ok(Credential {
            id: 9,
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            professional_card: new.professional_card,
            created_at: Utc::now(),
        })
    });

    let service = Authenticator::new(
        Arc::new(store),
        Arc::new(hasher),
        Arc::new(static_signer()),
    );

    let registered = service
        .register(
            "test@example.com".to_string(),
            "plaintextSecret".to_string(),
            "Test User".to_string(),
            "12345".to_string(),
        )
        .await
        .unwrap();

    let json = serde_json::to_string(&registered).unwrap();
    assert!(!json.contains("plaintextSecret"));
    assert!(!json.contains("hashedPassword"));
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn register_propagates_storage_failure_unchanged() {
    // Duplicate email is whatever the storage layer raises; the service
    // does not pre-check uniqueness.
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok("hashedPassword".to_string()));

    let mut store = MockCredentialStore::new();
    store.expect_find_by_email().never();
    store.expect_create().times(1).returning(|_| {
        Err(AppError::from(sea_orm::DbErr::Custom(
            "unique constraint violation: users_email_key".to_string(),
        )))
    });

    let service = Authenticator::new(
        Arc::new(store),
        Arc::new(hasher),
        Arc::new(static_signer()),
    );

    let result = service
        .register(
            "dup@example.com".to_string(),
            "password123".to_string(),
            "Dup".to_string(),
            "999".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_returns_token_and_user_on_valid_credentials() {
    let mut store = MockCredentialStore::new();
    store
        .expect_find_by_email()
        .with(eq("test@example.com"))
        .times(1)
        .returning(|_| Ok(Some(stored_credential(1, "test@example.com", "hashedPassword"))));

    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .with(eq("password123"), eq("hashedPassword"))
        .times(1)
        .returning(|_, _| true);

    let mut signer = MockTokenSigner::new();
    signer
        .expect_sign()
        .withf(|claims| {
            claims
                == &Claims {
                    sub: 1,
                    email: "test@example.com".to_string(),
                }
        })
        .times(1)
        .returning(|_| Ok("jwtToken".to_string()));

    let service = Authenticator::new(Arc::new(store), Arc::new(hasher), Arc::new(signer));

    let response = service
        .login("test@example.com".to_string(), "password123".to_string())
        .await
        .unwrap();

    assert_eq!(response.access_token, "jwtToken");
    assert_eq!(response.user.id, 1);
    assert_eq!(response.user.email, "test@example.com");
    assert_eq!(response.user.name, "Test User");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized_after_one_verify() {
    let mut store = MockCredentialStore::new();
    store
        .expect_find_by_email()
        .returning(|_| Ok(Some(stored_credential(1, "test@example.com", "hashedPassword"))));

    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .with(eq("wrongpassword"), eq("hashedPassword"))
        .times(1)
        .returning(|_, _| false);

    let mut signer = MockTokenSigner::new();
    signer.expect_sign().never();

    let service = Authenticator::new(Arc::new(store), Arc::new(hasher), Arc::new(signer));

    let result = service
        .login("test@example.com".to_string(), "wrongpassword".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized_without_verify() {
    let mut store = MockCredentialStore::new();
    store
        .expect_find_by_email()
        .with(eq("invalid@example.com"))
        .times(1)
        .returning(|_| Ok(None));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().never();

    let mut signer = MockTokenSigner::new();
    signer.expect_sign().never();

    let service = Authenticator::new(Arc::new(store), Arc::new(hasher), Arc::new(signer));

    let result = service
        .login("invalid@example.com".to_string(), "password123".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn login_error_kind_matches_for_unknown_email_and_wrong_password() {
    // Both failure paths collapse into the same kind; a caller cannot
    // enumerate accounts from the error shape.
    let mut store = MockCredentialStore::new();
    store
        .expect_find_by_email()
        .with(eq("known@example.com"))
        .returning(|_| Ok(Some(stored_credential(1, "known@example.com", "hashedPassword"))));
    store
        .expect_find_by_email()
        .with(eq("unknown@example.com"))
        .returning(|_| Ok(None));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(|_, _| false);

    let service = Authenticator::new(
        Arc::new(store),
        Arc::new(hasher),
        Arc::new(static_signer()),
    );

    let wrong_password = service
        .login("known@example.com".to_string(), "nope".to_string())
        .await
        .unwrap_err();
    let unknown_email = service
        .login("unknown@example.com".to_string(), "nope".to_string())
        .await
        .unwrap_err();

    assert_eq!(wrong_password.code(), unknown_email.code());
    assert_eq!(wrong_password.status(), unknown_email.status());
}

#[tokio::test]
async fn login_propagates_storage_failure() {
    let mut store = MockCredentialStore::new();
    store.expect_find_by_email().returning(|_| {
        Err(AppError::from(sea_orm::DbErr::Conn(
            sea_orm::RuntimeErr::Internal("connection refused".to_string()),
        )))
    });

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().never();

    let service = Authenticator::new(
        Arc::new(store),
        Arc::new(hasher),
        Arc::new(static_signer()),
    );

    let result = service
        .login("test@example.com".to_string(), "password123".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
}

// =============================================================================
// End-to-end with real hasher and signer
// =============================================================================

#[tokio::test]
async fn register_then_login_round_trip() {
    // Single-record in-memory store behavior via mock closures.
    let hasher = Arc::new(BcryptHasher);
    let signer = Arc::new(JwtSigner::new("test-secret-key-for-testing-only-32chars"));

    let hasher_for_store = hasher.clone();
    let stored: Arc<std::sync::Mutex<Option<Credential>>> =
        Arc::new(std::sync::Mutex::new(None));

    let mut store = MockCredentialStore::new();
    let stored_create = stored.clone();
    store.expect_create().returning(move |new| {
        let credential = Credential {
            id: 1,
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            professional_card: new.professional_card,
            created_at: Utc::now(),
        };
        *stored_create.lock().unwrap() = Some(credential.clone());
        Ok(credential)
    });
    let stored_find = stored.clone();
    store.expect_find_by_email().returning(move |email| {
        Ok(stored_find
            .lock()
            .unwrap()
            .clone()
            .filter(|c| c.email == email))
    });

    let service = Authenticator::new(Arc::new(store), hasher, signer);

    let registered = service
        .register(
            "round@example.com".to_string(),
            "password123".to_string(),
            "Round Trip".to_string(),
            "777".to_string(),
        )
        .await
        .unwrap();

    // The persisted hash is a real bcrypt hash of the password
    let persisted = stored.lock().unwrap().clone().unwrap();
    assert_ne!(persisted.password_hash, "password123");
    assert!(hasher_for_store.verify("password123", &persisted.password_hash));

    let response = service
        .login("round@example.com".to_string(), "password123".to_string())
        .await
        .unwrap();

    assert_eq!(response.user.id, registered.id);
    assert_eq!(response.user.email, registered.email);
    assert!(!response.access_token.is_empty());

    let rejected = service
        .login("round@example.com".to_string(), "password124".to_string())
        .await;
    assert!(matches!(rejected.unwrap_err(), AppError::Unauthorized));
}
