use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Form, Json};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::error::AuthError;
use super::password::verify_password;
use super::types::{SignInRequest, StatusResponse};
use crate::store::UserStore;

#[utoipa::path(
    post,
    path = "/api/sign_in",
    request_body(
        content = SignInRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses (
        (status = 200, description = "Credentials match", body = StatusResponse),
        (status = 401, description = "Authentication failed", body = String),
    ),
    tag = "auth"
)]
// axum handler for sign-in
#[instrument(skip_all)]
pub async fn sign_in(
    store: Extension<Arc<UserStore>>,
    payload: Option<Form<SignInRequest>>,
) -> impl IntoResponse {
    let request: SignInRequest = match payload {
        Some(Form(payload)) => payload,
        None => return AuthError::BadRequest("Missing payload".to_string()).into_response(),
    };

    // Unknown email and wrong password are indistinguishable from here on.
    let Ok(record) = store.find_by_email(&request.email) else {
        debug!("sign-in lookup failed");

        return AuthError::AuthenticationFailure.into_response();
    };

    match verify_password(request.password.expose_secret(), &record.password_digest).await {
        Ok(true) => (StatusCode::OK, Json(StatusResponse { success: true })).into_response(),
        Ok(false) => AuthError::AuthenticationFailure.into_response(),
        Err(err) => {
            error!("Failed to verify password: {err}");

            AuthError::AuthenticationFailure.into_response()
        }
    }
}
