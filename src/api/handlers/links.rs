//! Handlers for link listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::links::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all live links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Soft-deleted links are excluded; their codes stay reserved forever.
///
/// # Errors
///
/// Returns 503 Service Unavailable if the store cannot be read.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await.map_err(|e| {
        tracing::error!(error = %e, "listing links failed");
        AppError::unavailable("Link listing is temporarily unavailable", json!({}))
    })?;

    let items = links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.base_url))
        .collect();

    Ok(Json(items))
}

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// - The row is kept with its historical counters; only `deleted` flips
/// - Deletion is permanent: the code can never be reused or restored
/// - Idempotent: deleting a missing or already-deleted code also answers 204
///
/// # Errors
///
/// Returns 500 only on storage failure.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await.map_err(|e| {
        tracing::error!(error = %e, code, "deleting link failed");
        AppError::internal("Database error", json!({}))
    })?;

    Ok(StatusCode::NO_CONTENT)
}
