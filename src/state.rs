//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::infrastructure::persistence::PgLinkRepository;

/// Handler-visible application state.
///
/// Services own their repository handles; `base_url` is the public prefix
/// short URLs are rendered with.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub redirect_service: Arc<RedirectService<PgLinkRepository>>,
    pub base_url: String,
}
