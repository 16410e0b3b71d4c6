//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counters.
///
/// `code` maps to `target_url` forever: rows are soft-deleted, never erased,
/// and a code is never reassigned. Counters are mutated only by the storage
/// layer's atomic increment.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Link {
    /// Returns true if the link still serves redirects.
    pub fn is_live(&self) -> bool {
        !self.deleted
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
