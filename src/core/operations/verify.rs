//! Caller-facing hash generation and password verification.
//!
//! These are the two operations an authentication layer needs: produce a
//! string to persist when a password is set, and check a password against
//! that string at login.

use crate::core::config::HashConfig;
use crate::core::error::{HashError, HashResult};
use crate::core::types::PasswordHash;

/// Hashes `password` and returns the string to persist.
///
/// # Errors
///
/// Returns `HashError::InvalidParameters` for an invalid configuration or
/// `HashError::EntropySourceUnavailable` if no salt can be generated.
///
/// # Example
///
/// ```rust
/// use pbkdf2_hash::{generate_hash, verify_password, HashConfig};
///
/// let config = HashConfig::default();
/// let stored = generate_hash(b"hunter2", &config).expect("generate");
///
/// assert!(verify_password(b"hunter2", &stored, &config).expect("verify"));
/// assert!(!verify_password(b"hunter3", &stored, &config).expect("verify"));
/// assert!(!verify_password(b"hunter2", "not:enough:fields", &config).expect("verify"));
/// ```
pub fn generate_hash(password: &[u8], config: &HashConfig) -> HashResult<String> {
    let (_, encoded) = PasswordHash::generate(password, config)?;
    Ok(encoded)
}

/// Checks `password` against a previously generated hash string.
///
/// The algorithm, iteration count and key length come from `stored`; only
/// `config.text_encoding` is used. A malformed `stored` value, or one naming
/// an algorithm this crate does not provide, is reported as a non-match so
/// callers can treat a bad record and a wrong password alike.
///
/// # Errors
///
/// Returns an error only if re-deriving the key from a well-formed record
/// fails.
pub fn verify_password(password: &[u8], stored: &str, config: &HashConfig) -> HashResult<bool> {
    let hash = match PasswordHash::decode(stored, config.text_encoding) {
        Ok(hash) => hash,
        Err(HashError::MalformedHash) => {
            tracing::debug!("stored password hash is malformed; treating as mismatch");
            return Ok(false);
        }
        Err(HashError::UnsupportedAlgorithm(_)) => {
            tracing::debug!("stored password hash names an unsupported algorithm; treating as mismatch");
            return Ok(false);
        }
        Err(err) => return Err(err),
    };

    let matched = hash.matches(password)?;

    tracing::debug!(
        algorithm = %hash.algorithm(),
        iterations = hash.iterations(),
        matched,
        "verified password"
    );

    Ok(matched)
}
