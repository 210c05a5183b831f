//! API Library
//!
//! This crate provides the HTTP surface for the identity and directory
//! services, plus the static front end. The services are library crates
//! assembled here in a single process.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use directory_service::DirectoryLister;
use identity_service::{Authenticator, BcryptHasher, JwtSigner};
use store::{CredentialStore, Database, SqlCredentialStore};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn serve(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Connect and migrate. A missing or unreachable database is not fatal:
    // the directory listing degrades to its fallback entries and the auth
    // endpoints report the store as unavailable.
    let connection = match Database::connect(&config.database_url).await {
        Ok(db) => db.get_connection(),
        Err(e) => {
            warn!(error = %e, "database unavailable, starting without persistence");
            DatabaseConnection::Disconnected
        }
    };

    // Wire up the services with their injected collaborators
    let credential_store: Arc<dyn CredentialStore> = Arc::new(SqlCredentialStore::new(connection));
    let auth_service = Arc::new(Authenticator::new(
        credential_store.clone(),
        Arc::new(BcryptHasher),
        Arc::new(JwtSigner::new(config.jwt_secret.clone())),
    ));
    let directory_service = Arc::new(DirectoryLister::new(credential_store));

    let state = AppState::new(auth_service, directory_service);

    // Build router
    let app = create_router(state, &config.web_dir).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
