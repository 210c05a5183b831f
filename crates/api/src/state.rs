//! Application state for dependency injection.

use std::sync::Arc;

use directory_service::DirectoryService;
use identity_service::AuthService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub directory_service: Arc<dyn DirectoryService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        directory_service: Arc<dyn DirectoryService>,
    ) -> Self {
        Self {
            auth_service,
            directory_service,
        }
    }
}
