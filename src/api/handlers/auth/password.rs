//! Password hashing backed by bcrypt.
//!
//! Hashing runs on the blocking thread pool so it never stalls the async
//! runtime.

use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a password. `cost` falls back to the bcrypt default; tests pass a low
/// cost to stay fast.
pub(super) async fn hash_password(password: &str, cost: Option<u32>) -> Result<String> {
    let password = password.to_string();
    let cost = cost.unwrap_or(DEFAULT_COST);

    tokio::task::spawn_blocking(move || hash(password, cost))
        .await
        .context("hashing task failed")?
        .context("failed to hash password")
}

/// Verify a password against a stored digest.
pub(super) async fn verify_password(password: &str, digest: &str) -> Result<bool> {
    let password = password.to_string();
    let digest = digest.to_string();

    tokio::task::spawn_blocking(move || verify(password, &digest))
        .await
        .context("verification task failed")?
        .context("failed to verify password")
}
