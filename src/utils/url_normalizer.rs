//! URL normalization and destination validation.
//!
//! Turns raw user input into a canonical absolute URL and confirms the
//! destination host is a plausible, resolvable internet host. Syntax
//! normalization is pure; the DNS liveness check goes through the
//! [`HostResolver`] seam so callers can inject a real or no-op resolver.

use async_trait::async_trait;
use url::Url;

/// Errors that can occur while normalizing or validating a destination URL.
///
/// Callers collapse all variants into a single invalid-URL category; the
/// distinctions only matter for logging.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("only HTTP and HTTPS URLs can be shortened")]
    UnsupportedScheme,

    #[error("invalid hostname: {0}")]
    InvalidHost(String),

    #[error("hostname did not resolve: {0}")]
    UnresolvableHost(String),
}

/// Resolves hostnames to decide whether a destination is reachable.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - timeout-bounded system DNS lookup
/// - [`crate::infrastructure::dns::NullResolver`] - accepts every host (DNS check disabled)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns `true` if the host resolves to at least one address.
    async fn resolves(&self, host: &str) -> bool;
}

/// Normalizes raw input to a canonical absolute URL without touching the network.
///
/// # Normalization Rules
///
/// 1. Leading/trailing whitespace is trimmed
/// 2. Input without a scheme separator gets `https://` prepended
/// 3. Only HTTP and HTTPS schemes are accepted
/// 4. The hostname must be non-empty, contain at least one dot, not end in a
///    dot, and consist only of letters, digits, hyphens, and dots, with no
///    empty label and no label starting or ending in `-`
/// 5. Fragments are removed; path and query are preserved
/// 6. Default ports are omitted from the serialized form
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input,
/// [`UrlValidationError::UnsupportedScheme`] for non-HTTP(S) schemes, and
/// [`UrlValidationError::InvalidHost`] for malformed hostnames.
pub fn normalize_url(raw: &str) -> Result<Url, UrlValidationError> {
    let trimmed = raw.trim();

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let mut url =
        Url::parse(&candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedScheme),
    }

    let host = url
        .host_str()
        .ok_or_else(|| UrlValidationError::InvalidHost("missing hostname".to_string()))?;
    validate_host_syntax(host)?;

    url.set_fragment(None);

    Ok(url)
}

/// Normalizes the input and confirms the destination host resolves.
///
/// The resolver call is the only network access on the shorten path; bound its
/// latency in the [`HostResolver`] implementation, not here.
///
/// # Errors
///
/// All of [`normalize_url`]'s errors, plus
/// [`UrlValidationError::UnresolvableHost`] when the DNS check fails.
pub async fn normalize_and_validate(
    raw: &str,
    resolver: &dyn HostResolver,
) -> Result<String, UrlValidationError> {
    let url = normalize_url(raw)?;

    // normalize_url guarantees a host is present
    let host = url.host_str().unwrap_or_default();
    if !resolver.resolves(host).await {
        return Err(UrlValidationError::UnresolvableHost(host.to_string()));
    }

    Ok(url.to_string())
}

/// Checks that a hostname looks like a plausible public DNS name.
fn validate_host_syntax(host: &str) -> Result<(), UrlValidationError> {
    if host.is_empty() {
        return Err(UrlValidationError::InvalidHost(
            "missing hostname".to_string(),
        ));
    }

    if !host.contains('.') || host.ends_with('.') {
        return Err(UrlValidationError::InvalidHost(host.to_string()));
    }

    if !host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(UrlValidationError::InvalidHost(host.to_string()));
    }

    for label in host.split('.') {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return Err(UrlValidationError::InvalidHost(host.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_str(raw: &str) -> Result<String, UrlValidationError> {
        normalize_url(raw).map(|u| u.to_string())
    }

    #[test]
    fn test_normalize_simple_https() {
        assert_eq!(
            normalize_str("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_normalize_prepends_https() {
        assert_eq!(
            normalize_str("example.com/path").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_str("  example.com  ").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_normalize_keeps_http() {
        assert_eq!(
            normalize_str("http://example.com/a").unwrap(),
            "http://example.com/a"
        );
    }

    #[test]
    fn test_normalize_lowercases_host() {
        assert_eq!(
            normalize_str("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_normalize_omits_default_port() {
        assert_eq!(
            normalize_str("https://example.com:443/path").unwrap(),
            "https://example.com/path"
        );
        assert_eq!(
            normalize_str("http://example.com:80/path").unwrap(),
            "http://example.com/path"
        );
    }

    #[test]
    fn test_normalize_keeps_custom_port() {
        assert_eq!(
            normalize_str("http://example.com:8080/path").unwrap(),
            "http://example.com:8080/path"
        );
    }

    #[test]
    fn test_normalize_removes_fragment() {
        assert_eq!(
            normalize_str("https://example.com/page?key=value#section").unwrap(),
            "https://example.com/page?key=value"
        );
    }

    #[test]
    fn test_normalize_preserves_query_params() {
        assert_eq!(
            normalize_str("https://example.com/search?q=rust&lang=en").unwrap(),
            "https://example.com/search?q=rust&lang=en"
        );
    }

    #[test]
    fn test_normalize_rejects_ftp() {
        assert!(matches!(
            normalize_str("ftp://example.com/file.txt"),
            Err(UrlValidationError::UnsupportedScheme)
        ));
    }

    #[test]
    fn test_normalize_rejects_javascript() {
        // no "://", so it parses as https://javascript:alert(1) and fails on the host
        assert!(normalize_str("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_normalize_rejects_file_scheme() {
        assert!(matches!(
            normalize_str("file:///etc/passwd"),
            Err(UrlValidationError::UnsupportedScheme)
        ));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize_str("").is_err());
        assert!(normalize_str("   ").is_err());
    }

    #[test]
    fn test_normalize_rejects_host_without_dot() {
        assert!(matches!(
            normalize_str("http://localhost:3000/test"),
            Err(UrlValidationError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_trailing_dot() {
        assert!(matches!(
            normalize_str("https://example.com./path"),
            Err(UrlValidationError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_bad_labels() {
        assert!(normalize_str("https://-bad.example.com").is_err());
        assert!(normalize_str("https://bad-.example.com").is_err());
        assert!(normalize_str("https://bad..example.com").is_err());
    }

    #[test]
    fn test_normalize_accepts_ipv4_host() {
        assert_eq!(
            normalize_str("http://192.168.1.1:8080/api").unwrap(),
            "http://192.168.1.1:8080/api"
        );
    }

    #[test]
    fn test_normalize_accepts_subdomains_and_hyphens() {
        assert_eq!(
            normalize_str("https://api.my-site.example.com/v1").unwrap(),
            "https://api.my-site.example.com/v1"
        );
    }

    #[tokio::test]
    async fn test_validate_resolvable_host() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolves()
            .withf(|host| host == "example.com")
            .times(1)
            .returning(|_| true);

        let result = normalize_and_validate("example.com/path", &resolver).await;

        assert_eq!(result.unwrap(), "https://example.com/path");
    }

    #[tokio::test]
    async fn test_validate_unresolvable_host() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolves().times(1).returning(|_| false);

        let result = normalize_and_validate("https://no-such-host.invalid", &resolver).await;

        assert!(matches!(
            result,
            Err(UrlValidationError::UnresolvableHost(_))
        ));
    }

    #[tokio::test]
    async fn test_validate_skips_dns_for_bad_syntax() {
        // resolver must not be called for input that fails normalization
        let resolver = MockHostResolver::new();

        let result = normalize_and_validate("ftp://example.com", &resolver).await;

        assert!(matches!(result, Err(UrlValidationError::UnsupportedScheme)));
    }
}
