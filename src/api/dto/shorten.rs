//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL; the scheme may be omitted (defaults to HTTPS).
    /// Full normalization and the code format check happen in the service,
    /// this only caps the request size.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,

    /// Optional caller-chosen short code (3-8 alphanumeric characters).
    pub custom_code: Option<String>,
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
}
