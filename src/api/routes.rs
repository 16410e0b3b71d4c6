//! API route configuration.

use crate::api::handlers::{delete_link_handler, list_links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Management API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create a shortened URL
/// - `GET    /links`          - List live links, newest first
/// - `DELETE /links/{code}`   - Soft-delete a link (idempotent)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{code}", delete(delete_link_handler))
}
