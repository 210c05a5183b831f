//! Directory service - user listing with a fixed fallback.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use domain::DirectoryEntry;
use store::CredentialStore;

/// Directory service trait for dependency injection.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// List all users.
    ///
    /// Infallible by contract: a storage failure degrades to the sample
    /// entries rather than an error. No pagination, filtering, or
    /// ordering beyond what the store returns.
    async fn list(&self) -> Vec<DirectoryEntry>;
}

/// Concrete implementation of DirectoryService backed by the credential
/// store.
pub struct DirectoryLister {
    store: Arc<dyn CredentialStore>,
}

impl DirectoryLister {
    /// Create new directory service instance
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Sample entries served while the store is unavailable.
    fn fallback_entries() -> Vec<DirectoryEntry> {
        vec![
            DirectoryEntry {
                id: 1,
                name: "Nutritionist Jane".to_string(),
                email: Some("jane@example.com".to_string()),
            },
            DirectoryEntry {
                id: 2,
                name: "Client Bob".to_string(),
                email: Some("bob@example.com".to_string()),
            },
        ]
    }
}

#[async_trait]
impl DirectoryService for DirectoryLister {
    async fn list(&self) -> Vec<DirectoryEntry> {
        match self.store.find_all().await {
            Ok(credentials) => credentials.into_iter().map(DirectoryEntry::from).collect(),
            Err(e) => {
                // The caller still gets a list; operators get the failure.
                warn!(error = %e, "credential store unavailable, serving fallback directory");
                Self::fallback_entries()
            }
        }
    }
}
