//! Short code generation and validation utilities.
//!
//! Generated codes are drawn uniformly from the 62-character alphanumeric
//! alphabet. Collision handling is the caller's responsibility.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Maximum random-code insert attempts before falling back to a suffixed code.
pub const MAX_GENERATION_ATTEMPTS: u32 = 10;

/// Compiled pattern for user-supplied custom codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,8}$").unwrap());

/// Generates a random 6-character alphanumeric short code.
///
/// Each position is an independent uniform draw from `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Generates a fresh code with a random decimal suffix in `0..1000`.
///
/// Last-resort fallback after [`MAX_GENERATION_ATTEMPTS`] collisions; widens
/// the candidate space beyond the plain 6-character alphabet.
pub fn generate_suffixed_code() -> String {
    let suffix = rand::rng().random_range(0..1000u16);
    format!("{}{}", generate_code(), suffix)
}

/// Validates a user-provided custom short code.
///
/// Accepts exactly 3 to 8 ASCII alphanumeric characters, nothing else.
pub fn validate_custom_code(code: &str) -> bool {
    CUSTOM_CODE_REGEX.is_match(code)
}
