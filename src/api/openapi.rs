//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::User;
use crate::types::ErrorEnvelope;

/// OpenAPI documentation for the user directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "CRUD operations over users with a uniform message/data/error envelope",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:1323", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
    ),
    components(
        schemas(
            User,
            ErrorEnvelope,
            user_handler::UserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
