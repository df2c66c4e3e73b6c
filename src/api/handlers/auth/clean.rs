use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{instrument, warn};

use super::types::StatusResponse;
use crate::store::UserStore;

#[utoipa::path(
    post,
    path = "/api/clean",
    responses (
        (status = 200, description = "All accounts removed", body = StatusResponse),
    ),
    tag = "cleanup"
)]
// axum handler for cleanup
//
// Maintenance operation for test isolation: wipes every account and always
// succeeds. Nothing guards against invoking it in production; do not expose
// this route beyond trusted environments.
#[instrument(skip_all)]
pub async fn clean(store: Extension<Arc<UserStore>>) -> impl IntoResponse {
    let removed = store.clear();

    warn!("cleanup removed {removed} account(s)");

    (StatusCode::OK, Json(StatusResponse { success: true }))
}
