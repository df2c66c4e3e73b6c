//! Signup credential validation.
//!
//! Checks run in a fixed order and fail fast on the first violation, each with
//! its own user-facing message.

use super::error::AuthError;
use regex::Regex;

/// Special characters a password must draw from.
const SPECIAL_CHARACTERS: &[char] = &['@', '_', '!', '#', '$', '%', '^', '&', '*', '?'];

const MIN_PASSWORD_LENGTH: usize = 8;

/// Independent password strength predicates; all must hold.
/// New rules go here without touching the control flow in `valid_password`.
const PASSWORD_RULES: &[fn(&str) -> bool] = &[
    |password| password.chars().any(char::is_uppercase),
    |password| password.chars().any(char::is_lowercase),
    |password| password.chars().any(|c| c.is_ascii_digit()),
    |password| password.chars().count() >= MIN_PASSWORD_LENGTH,
    |password| password.contains(SPECIAL_CHARACTERS),
];

pub(super) fn valid_email(email: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .is_ok_and(|regex| regex.is_match(email))
}

/// The username must not appear inside the password.
pub(super) fn valid_password(password: &str, username: &str) -> bool {
    PASSWORD_RULES.iter().all(|rule| rule(password)) && !password.contains(username)
}

/// Validate signup input, failing fast on the first violation.
///
/// # Errors
/// Returns `AuthError::BadRequest` with a field-specific reason.
pub(super) fn validate_signup(
    username: &str,
    password: &str,
    email: &str,
) -> Result<(), AuthError> {
    if username.trim().is_empty() {
        return Err(AuthError::BadRequest("Please enter a username".to_string()));
    }

    if password.trim().is_empty() {
        return Err(AuthError::BadRequest("Please enter a password".to_string()));
    }

    if !valid_password(password, username) {
        return Err(AuthError::BadRequest(
            "Please enter a valid password".to_string(),
        ));
    }

    if email.trim().is_empty() {
        return Err(AuthError::BadRequest("Please enter an email".to_string()));
    }

    if !valid_email(email) {
        return Err(AuthError::BadRequest(
            "Please enter a valid email".to_string(),
        ));
    }

    Ok(())
}
