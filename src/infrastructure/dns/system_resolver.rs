//! Timeout-bounded DNS lookup through the operating system resolver.

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::{debug, warn};

use crate::utils::url_normalizer::HostResolver;

/// Resolves hosts via `tokio::net::lookup_host` with a hard timeout.
///
/// A hung upstream resolver must not stall the shorten path, so every lookup
/// is bounded; a timeout counts as "does not resolve".
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    /// Creates a resolver with the given per-lookup timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolves(&self, host: &str) -> bool {
        // lookup_host wants a port; it plays no role in resolution
        match tokio::time::timeout(self.timeout, lookup_host((host, 443u16))).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(e)) => {
                debug!(host, error = %e, "DNS lookup failed");
                false
            }
            Err(_) => {
                warn!(host, timeout = ?self.timeout, "DNS lookup timed out");
                false
            }
        }
    }
}
