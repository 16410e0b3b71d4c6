//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// JSON representation of a live link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds the response view, rendering the short URL under `base_url`.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.code);

        Self {
            code: link.code,
            target_url: link.target_url,
            short_url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}
