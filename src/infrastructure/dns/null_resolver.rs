//! No-op resolver used when the DNS liveness check is disabled.

use async_trait::async_trait;

use crate::utils::url_normalizer::HostResolver;

/// Accepts every syntactically valid host without touching the network.
///
/// Selected when `DNS_CHECK=false`, e.g. for air-gapped deployments, and by
/// the integration test harness.
pub struct NullResolver;

#[async_trait]
impl HostResolver for NullResolver {
    async fn resolves(&self, _host: &str) -> bool {
        true
    }
}
