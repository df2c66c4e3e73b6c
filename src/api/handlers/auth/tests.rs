//! Handler tests for signup, sign-in, and cleanup.
//!
//! These drive the real router end-to-end with in-memory stores, asserting
//! the behavioral contract: validation messages, conflict detection, the
//! undifferentiated sign-in failure, and cleanup semantics.

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use super::password::hash_password;
use crate::api::router;
use crate::store::{StoreError, UserStore};

const FORM: &str = "application/x-www-form-urlencoded";

fn app() -> (Router, Arc<UserStore>) {
    let store = Arc::new(UserStore::new());
    (router(Arc::clone(&store)), store)
}

fn form_post(uri: &str, body: &str) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, FORM)
        .body(Body::from(body.to_string()))?)
}

async fn body_string(response: axum::response::Response) -> Result<String> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn signup_creates_account_retrievable_by_username_and_email() -> Result<()> {
    let (app, store) = app();

    let response = app
        .oneshot(form_post(
            "/api/signup",
            "username=Alice&password=Abcdefg1!&email=Alice@Example.com",
        )?)
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_string(response).await?, r#"{"success":true}"#);

    assert_eq!(store.len(), 1);
    let record = store.find_by_username("ALICE").expect("find by username");
    assert_eq!(record.email, "alice@example.com");
    assert!(store.find_by_email("alice@EXAMPLE.com").is_ok());
    Ok(())
}

#[tokio::test]
async fn signup_rejects_duplicate_username_regardless_of_email() -> Result<()> {
    let (app, store) = app();

    let first = app
        .clone()
        .oneshot(form_post(
            "/api/signup",
            "username=alice&password=Abcdefg1!&email=alice@example.com",
        )?)
        .await?;
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same username in a different case, brand-new email
    let second = app
        .oneshot(form_post(
            "/api/signup",
            "username=ALICE&password=Abcdefg1!&email=fresh@example.com",
        )?)
        .await?;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_string(second).await?, "Username already exists");
    assert_eq!(store.len(), 1);
    Ok(())
}

#[tokio::test]
async fn signup_rejects_duplicate_email() -> Result<()> {
    let (app, store) = app();

    let first = app
        .clone()
        .oneshot(form_post(
            "/api/signup",
            "username=alice&password=Abcdefg1!&email=alice@example.com",
        )?)
        .await?;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(form_post(
            "/api/signup",
            "username=bob&password=Abcdefg1!&email=Alice@example.com",
        )?)
        .await?;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_string(second).await?, "Email already exists");
    assert_eq!(store.len(), 1);
    Ok(())
}

#[tokio::test]
async fn signup_rejects_weak_passwords_without_inserting() -> Result<()> {
    let (app, store) = app();

    // Too short
    let short = app
        .clone()
        .oneshot(form_post(
            "/api/signup",
            "username=alice&password=abc&email=alice@example.com",
        )?)
        .await?;
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(short).await?, "Please enter a valid password");

    // No special character
    let plain = app
        .oneshot(form_post(
            "/api/signup",
            "username=alice&password=Abcdefg1&email=alice@example.com",
        )?)
        .await?;
    assert_eq!(plain.status(), StatusCode::BAD_REQUEST);

    assert!(store.is_empty());
    Ok(())
}

#[tokio::test]
async fn signup_rejects_invalid_email() -> Result<()> {
    let (app, store) = app();

    let response = app
        .oneshot(form_post(
            "/api/signup",
            "username=alice&password=Abcdefg1!&email=not-an-email",
        )?)
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await?, "Please enter a valid email");
    assert!(store.is_empty());
    Ok(())
}

#[tokio::test]
async fn signup_without_payload_is_a_bad_request() -> Result<()> {
    let (app, _store) = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/signup")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await?, "Missing payload");
    Ok(())
}

#[tokio::test]
async fn sign_in_succeeds_with_correct_credentials() -> Result<()> {
    let (app, store) = app();
    let digest = hash_password("Abcdefg1!", Some(4)).await?;
    store
        .insert("alice", "alice@example.com", digest)
        .expect("seed account");

    let response = app
        .oneshot(form_post(
            "/api/sign_in",
            "email=alice@example.com&password=Abcdefg1!",
        )?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await?, r#"{"success":true}"#);
    Ok(())
}

#[tokio::test]
async fn sign_in_failures_are_indistinguishable() -> Result<()> {
    let (app, store) = app();
    let digest = hash_password("Abcdefg1!", Some(4)).await?;
    store
        .insert("alice", "alice@example.com", digest)
        .expect("seed account");

    let wrong_password = app
        .clone()
        .oneshot(form_post(
            "/api/sign_in",
            "email=alice@example.com&password=Wrong1234!",
        )?)
        .await?;
    let unknown_email = app
        .oneshot(form_post(
            "/api/sign_in",
            "email=nobody@example.com&password=Abcdefg1!",
        )?)
        .await?;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same body too, so the response never leaks which field was wrong.
    assert_eq!(
        body_string(wrong_password).await?,
        body_string(unknown_email).await?
    );
    Ok(())
}

#[tokio::test]
async fn clean_removes_every_account() -> Result<()> {
    let (app, store) = app();
    let digest = hash_password("Abcdefg1!", Some(4)).await?;
    store
        .insert("alice", "alice@example.com", digest)
        .expect("seed account");

    let response = app
        .clone()
        .oneshot(form_post("/api/clean", "")?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await?, r#"{"success":true}"#);
    assert!(store.is_empty());
    assert_eq!(store.find_by_username("alice"), Err(StoreError::NotFound));

    // Cleanup is idempotent
    let again = app.oneshot(form_post("/api/clean", "")?).await?;
    assert_eq!(again.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn health_reports_service_metadata() -> Result<()> {
    let (app, _store) = app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-App"));
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    Ok(())
}
