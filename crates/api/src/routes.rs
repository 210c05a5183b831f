//! Route configuration.

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{auth_routes, directory_routes, health_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, web_dir: &str) -> Router {
    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health check
        .nest("/api/health", health_routes())
        // Auth routes
        .nest("/api/auth", auth_routes())
        // Directory listing
        .nest("/api/users", directory_routes())
        .with_state(state)
        // Static front end for everything else
        .fallback_service(ServeDir::new(web_dir))
        // The front end may be served from another origin during development
        .layer(CorsLayer::permissive())
}
