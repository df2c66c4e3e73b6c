//! Request/response types for the auth endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct SignupRequest {
    pub username: String,
    #[schema(value_type = String, format = Password)]
    pub password: SecretString,
    pub email: String,
}

#[derive(ToSchema, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    #[schema(value_type = String, format = Password)]
    pub password: SecretString,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub success: bool,
}
