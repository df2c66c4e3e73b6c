//! In-memory account store.
//!
//! Accounts are indexed by normalized (lowercased) username and by normalized
//! email, both maps pointing at the same shared record. Every mutation runs
//! inside one mutex critical section, so "check existing + insert" is atomic
//! and two concurrent signups with the same username cannot both succeed.
//!
//! State lives only for the process lifetime; there is no persistence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("username already exists")]
    DuplicateUsername,
    #[error("email already exists")]
    DuplicateEmail,
}

/// A stored account. `username` and `email` are kept lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password_digest: String,
}

#[derive(Debug, Default)]
pub struct UserStore {
    inner: Mutex<Indexes>,
}

#[derive(Debug, Default)]
struct Indexes {
    by_username: HashMap<String, Arc<UserRecord>>,
    by_email: HashMap<String, Arc<UserRecord>>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Records are plain data, so a poisoned lock still holds consistent maps.
    fn indexes(&self) -> MutexGuard<'_, Indexes> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up an account by username, case-insensitively.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no account matches.
    pub fn find_by_username(&self, username: &str) -> Result<Arc<UserRecord>, StoreError> {
        self.indexes()
            .by_username
            .get(&username.to_lowercase())
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Look up an account by email, case-insensitively.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no account matches.
    pub fn find_by_email(&self, email: &str) -> Result<Arc<UserRecord>, StoreError> {
        self.indexes()
            .by_email
            .get(&email.to_lowercase())
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Insert a new account, lowercasing username and email before storing.
    ///
    /// Uniqueness is enforced here, inside the critical section. The username
    /// key is checked before the email key, so a signup that reuses both
    /// fields reports the username conflict.
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateUsername` or `StoreError::DuplicateEmail`
    /// if either key is already present.
    pub fn insert(
        &self,
        username: &str,
        email: &str,
        password_digest: String,
    ) -> Result<Arc<UserRecord>, StoreError> {
        let username = username.to_lowercase();
        let email = email.to_lowercase();

        let mut indexes = self.indexes();

        if indexes.by_username.contains_key(&username) {
            return Err(StoreError::DuplicateUsername);
        }

        if indexes.by_email.contains_key(&email) {
            return Err(StoreError::DuplicateEmail);
        }

        let record = Arc::new(UserRecord {
            username: username.clone(),
            email: email.clone(),
            password_digest,
        });

        indexes.by_username.insert(username, Arc::clone(&record));
        indexes.by_email.insert(email, Arc::clone(&record));

        Ok(record)
    }

    /// Remove every account and return how many were removed.
    ///
    /// Test/reset use only; nothing guards against calling this in production.
    pub fn clear(&self) -> usize {
        let mut indexes = self.indexes();
        let removed = indexes.by_username.len();
        indexes.by_username.clear();
        indexes.by_email.clear();
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes().by_username.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
