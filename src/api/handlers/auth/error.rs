//! User-facing error kinds for the auth endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by signup, sign-in, and cleanup.
///
/// `AuthenticationFailure` deliberately carries no detail: unknown email and
/// wrong password produce the same status and body.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("authentication failed")]
    AuthenticationFailure,

    #[error("internal error")]
    Internal,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::AuthenticationFailure => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_keeps_the_specific_reason() {
        let response = AuthError::BadRequest("Please enter a username".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_maps_to_409() {
        let response = AuthError::Conflict("Username already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn authentication_failure_is_generic() {
        assert_eq!(AuthError::AuthenticationFailure.to_string(), "authentication failed");
        let response = AuthError::AuthenticationFailure.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
