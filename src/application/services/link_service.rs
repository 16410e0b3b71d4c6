//! Link creation, deletion, and listing service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::code_generator::{
    MAX_GENERATION_ATTEMPTS, generate_code, generate_suffixed_code, validate_custom_code,
};
use crate::utils::url_normalizer::{HostResolver, UrlValidationError, normalize_and_validate};

/// Errors surfaced by the shorten flow.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("a URL is required")]
    MissingUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("custom code must be 3-8 alphanumeric characters")]
    BadCodeFormat,

    #[error("this code is already taken")]
    CodeTaken,

    #[error("could not assign a unique code after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    #[error("storage failure: {0}")]
    Storage(#[source] anyhow::Error),
}

impl ShortenError {
    fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::Backend(err) => Self::Storage(err),
            other => Self::Storage(anyhow::Error::new(other)),
        }
    }
}

/// Service orchestrating link creation and management.
///
/// Composes URL normalization, the DNS liveness check, and code assignment on
/// top of the link store. Collision handling relies entirely on the store's
/// uniqueness constraint; no in-process locking.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    resolver: Arc<dyn HostResolver>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Creates a short link for the given destination.
    ///
    /// # Arguments
    ///
    /// - `raw_url` - The destination as typed by the user
    /// - `custom_code` - Optional caller-chosen short code
    ///
    /// # Code Assignment
    ///
    /// - A custom code is validated for syntax and inserted once; losing the
    ///   insert race surfaces as [`ShortenError::CodeTaken`]
    /// - Otherwise random 6-character codes are tried up to
    ///   [`MAX_GENERATION_ATTEMPTS`] times, then one suffixed fallback; if
    ///   that also collides, [`ShortenError::ExhaustedRetries`]
    ///
    /// # Errors
    ///
    /// [`ShortenError::MissingUrl`] for blank input,
    /// [`ShortenError::InvalidUrl`] for anything that fails normalization or
    /// the DNS check, [`ShortenError::BadCodeFormat`] / [`ShortenError::CodeTaken`]
    /// for custom-code problems, [`ShortenError::Storage`] for unexpected
    /// persistence failures. Failures never leave a row behind.
    pub async fn shorten(
        &self,
        raw_url: &str,
        custom_code: Option<String>,
    ) -> Result<Link, ShortenError> {
        let raw = raw_url.trim();
        if raw.is_empty() {
            return Err(ShortenError::MissingUrl);
        }

        let target_url = normalize_and_validate(raw, self.resolver.as_ref()).await?;

        let custom = custom_code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        match custom {
            Some(code) => self.insert_with_custom_code(target_url, code).await,
            None => self.insert_with_generated_code(target_url).await,
        }
    }

    /// Soft-deletes a link. Idempotent; unknown codes are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), StoreError> {
        self.repository.mark_deleted(code).await
    }

    /// Lists all live links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, StoreError> {
        self.repository.list_live().await
    }

    /// Probes the link store, for the liveness endpoint.
    pub async fn health_check(&self) -> bool {
        self.repository.ping().await.is_ok()
    }

    async fn insert_with_custom_code(
        &self,
        target_url: String,
        code: String,
    ) -> Result<Link, ShortenError> {
        if !validate_custom_code(&code) {
            return Err(ShortenError::BadCodeFormat);
        }

        // Advisory fast-path only: the unique index enforced by insert is the
        // correctness guarantee, check-then-insert is not atomic.
        if self
            .repository
            .exists(&code)
            .await
            .map_err(ShortenError::from_store)?
        {
            return Err(ShortenError::CodeTaken);
        }

        match self.repository.insert(NewLink { code, target_url }).await {
            Ok(link) => Ok(link),
            Err(StoreError::DuplicateCode) => Err(ShortenError::CodeTaken),
            Err(e) => Err(ShortenError::from_store(e)),
        }
    }

    async fn insert_with_generated_code(&self, target_url: String) -> Result<Link, ShortenError> {
        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            match self
                .repository
                .insert(NewLink {
                    code,
                    target_url: target_url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(StoreError::DuplicateCode) => {
                    warn!(attempt, "generated code collided, retrying");
                }
                Err(e) => return Err(ShortenError::from_store(e)),
            }
        }

        // One widened attempt; a collision here gets an explicit error instead
        // of looping forever.
        let code = generate_suffixed_code();
        match self.repository.insert(NewLink { code, target_url }).await {
            Ok(link) => Ok(link),
            Err(StoreError::DuplicateCode) => Err(ShortenError::ExhaustedRetries {
                attempts: MAX_GENERATION_ATTEMPTS + 1,
            }),
            Err(e) => Err(ShortenError::from_store(e)),
        }
    }
}
