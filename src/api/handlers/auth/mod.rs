//! Account signup, sign-in, and cleanup handlers.
//!
//! Signup validates credentials, hashes the password with bcrypt, and inserts
//! the account atomically; the store rejects duplicate usernames or emails
//! inside its critical section, so no pre-check race exists.
//!
//! Sign-in failures are a single undifferentiated `401`: responses never
//! reveal whether the email was unknown or the password was wrong.

pub mod clean;
mod error;
mod password;
pub mod sign_in;
pub mod signup;
pub mod types;
mod validate;

pub use error::AuthError;

#[cfg(test)]
mod tests;
