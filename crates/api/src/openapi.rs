//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::{LoginRequest, RegisterRequest};
use crate::handlers::health_handler::HealthResponse;
use domain::{DirectoryEntry, LoginUser, RegisteredUser};
use identity_service::LoginResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::directory_handler::list_users,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            LoginUser,
            RegisteredUser,
            DirectoryEntry,
            HealthResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Directory", description = "User listing"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
