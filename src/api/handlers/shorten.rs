//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "example.com/some/page",
///   "custom_code": "promo25"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a missing or invalid URL (including hosts that
/// fail the DNS check) and for a malformed custom code, 409 Conflict when the
/// custom code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(&payload.url, payload.custom_code)
        .await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), link.code);

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        target_url: link.target_url,
    }))
}
