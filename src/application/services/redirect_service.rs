//! Redirect resolution service.

use std::sync::Arc;

use crate::domain::repositories::{LinkRepository, StoreError};

/// Service resolving a short code to its destination on each visit.
///
/// Resolution and click accounting are a single atomic store operation, so
/// `total_clicks` reflects exactly the number of successful resolutions no
/// matter how redirects interleave.
pub struct RedirectService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a code, incrementing its click counter.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown and soft-deleted codes
    /// alike; callers cannot tell the two apart, so deletion state never
    /// leaks. Returns [`StoreError::Backend`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, StoreError> {
        self.repository.increment_and_fetch(code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test]
    async fn test_resolve_returns_target_url() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_and_fetch()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok("https://example.com/target".to_string()));

        let service = RedirectService::new(Arc::new(mock_repo));

        let result = service.resolve("abc123").await;

        assert_eq!(result.unwrap(), "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_and_fetch()
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let service = RedirectService::new(Arc::new(mock_repo));

        let result = service.resolve("nosuchcode").await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}
