use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Form, Json};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::error::AuthError;
use super::password::hash_password;
use super::types::{SignupRequest, StatusResponse};
use super::validate::validate_signup;
use crate::store::{StoreError, UserStore};

#[utoipa::path(
    post,
    path = "/api/signup",
    request_body(
        content = SignupRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses (
        (status = 201, description = "Account created", body = StatusResponse),
        (status = 400, description = "Missing or invalid username, password, or email", body = String),
        (status = 409, description = "Username or email already registered", body = String),
    ),
    tag = "auth"
)]
// axum handler for signup
#[instrument(skip_all)]
pub async fn signup(
    store: Extension<Arc<UserStore>>,
    payload: Option<Form<SignupRequest>>,
) -> impl IntoResponse {
    let request: SignupRequest = match payload {
        Some(Form(payload)) => payload,
        None => return AuthError::BadRequest("Missing payload".to_string()).into_response(),
    };

    if let Err(err) = validate_signup(
        &request.username,
        request.password.expose_secret(),
        &request.email,
    ) {
        debug!("signup validation failed: {err}");

        return err.into_response();
    }

    let digest = match hash_password(request.password.expose_secret(), None).await {
        Ok(digest) => digest,
        Err(err) => {
            error!("Failed to hash password: {err}");

            return AuthError::Internal.into_response();
        }
    };

    // The store enforces uniqueness inside its critical section; no
    // check-then-insert race here.
    match store.insert(&request.username, &request.email, digest) {
        Ok(record) => {
            debug!("created account for {}", record.username);

            (StatusCode::CREATED, Json(StatusResponse { success: true })).into_response()
        }
        Err(StoreError::DuplicateUsername) => {
            AuthError::Conflict("Username already exists".to_string()).into_response()
        }
        Err(StoreError::DuplicateEmail) => {
            AuthError::Conflict("Email already exists".to_string()).into_response()
        }
        Err(err) => {
            error!("Failed to store account: {err}");

            AuthError::Internal.into_response()
        }
    }
}
