//! Directory handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use domain::DirectoryEntry;

use crate::state::AppState;

/// Create directory routes
pub fn directory_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

/// List all users
///
/// Always succeeds: when the credential store is unreachable the listing
/// degrades to a fixed sample set.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Directory",
    responses(
        (status = 200, description = "List of all users", body = Vec<DirectoryEntry>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<DirectoryEntry>> {
    Json(state.directory_service.list().await)
}
