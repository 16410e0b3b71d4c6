//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;

/// Errors surfaced by link storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The code already exists, live or soft-deleted.
    #[error("code already exists")]
    DuplicateCode,

    /// No live row matches the code. Missing and soft-deleted rows are
    /// indistinguishable here on purpose.
    #[error("no live link for this code")]
    NotFound,

    /// Any unexpected persistence failure.
    #[error("storage failure: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Repository interface for the link store.
///
/// Every operation is a single round trip against the backing store. All
/// cross-request guarantees (code uniqueness, counter atomicity) live behind
/// this trait, never in application code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns whether any row, live or deleted, holds this code.
    ///
    /// Advisory only: the unique constraint enforced by [`Self::insert`] is
    /// the correctness guarantee, because check-then-insert is not atomic.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Creates a new link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the code is already taken,
    /// including the race where two concurrent requests pick the same code:
    /// exactly one insert wins.
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Atomically increments `total_clicks`, stamps `last_clicked`, and
    /// returns the target URL, for live rows only.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code is unknown or the row is
    /// soft-deleted.
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    async fn increment_and_fetch(&self, code: &str) -> Result<String, StoreError>;

    /// Soft-deletes a link by setting `deleted = true`.
    ///
    /// Idempotent: a missing or already-deleted code is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    async fn mark_deleted(&self, code: &str) -> Result<(), StoreError>;

    /// Lists all live links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    async fn list_live(&self) -> Result<Vec<Link>, StoreError>;

    /// Runs a trivial query to probe storage liveness.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the store is unreachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
