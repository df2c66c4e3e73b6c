//! # Eniri
//!
//! `eniri` is a minimal account service: signup with password policy
//! validation, sign-in verification, and a test-only cleanup endpoint.
//!
//! Accounts live in an in-memory [`store::UserStore`] for the lifetime of the
//! process. There is no session or token issuance; the service only records
//! accounts and answers whether a set of credentials matches one.

pub mod api;
pub mod cli;
pub mod store;
