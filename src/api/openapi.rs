use crate::api::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::auth::signup::signup,
        handlers::auth::sign_in::sign_in,
        handlers::auth::clean::clean,
    ),
    components(schemas(
        handlers::health::Health,
        handlers::auth::types::SignupRequest,
        handlers::auth::types::SignInRequest,
        handlers::auth::types::StatusResponse,
    )),
    tags(
        (name = "auth", description = "Account signup and sign-in"),
        (name = "cleanup", description = "Test-only maintenance operations"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

/// Build the `OpenAPI` document served next to the Swagger UI.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
