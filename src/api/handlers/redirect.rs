//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::domain::repositories::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The click counter and `last_clicked` timestamp are updated atomically with
/// the lookup, so every 307 response is counted exactly once.
///
/// # Errors
///
/// Returns 404 Not Found for unknown and soft-deleted codes alike.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.redirect_service.resolve(&code).await {
        Ok(target_url) => Ok(Redirect::temporary(&target_url)),
        Err(StoreError::NotFound) => {
            Err(AppError::not_found("Unknown code", json!({ "code": code })))
        }
        Err(e) => {
            tracing::error!(error = %e, code, "redirect lookup failed");
            Err(AppError::internal("Database error", json!({})))
        }
    }
}
