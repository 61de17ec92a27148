//! Hashing configuration.
//!
//! A [`HashConfig`] is supplied once by the caller and passed by reference into
//! generation and verification. It is a plain `Copy` value: there are no
//! mutable defaults shared between requests.

use crate::core::algorithm::Algorithm;
use crate::core::encoding::TextEncoding;
use crate::core::error::{HashError, HashResult};

/// Default iteration count (work factor).
pub const DEFAULT_ITERATIONS: u32 = 1024;

/// Default salt length in bytes.
pub const DEFAULT_SALT_LENGTH: usize = 32;

/// Default derived key length in bytes.
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Iteration count below which generation logs a warning.
pub const RECOMMENDED_MIN_ITERATIONS: u32 = 10_000;

/// Parameters for generating and verifying password hashes.
///
/// Verification only consults `text_encoding`; the algorithm and work factor
/// of an existing hash are read from the stored string itself.
///
/// # Example
///
/// ```rust
/// use pbkdf2_hash::{Algorithm, HashConfig, TextEncoding};
///
/// let config = HashConfig {
///     algorithm: Algorithm::Sha512,
///     text_encoding: TextEncoding::Hex,
///     ..HashConfig::interactive()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HashConfig {
    /// HMAC hash function used for new hashes.
    pub algorithm: Algorithm,
    /// PBKDF2 iteration count for new hashes.
    pub iterations: u32,
    /// Salt length in bytes.
    pub salt_length: usize,
    /// Derived key length in bytes.
    pub key_length: usize,
    /// Text encoding of the salt and derived key fields.
    pub text_encoding: TextEncoding,
}

impl Default for HashConfig {
    /// SHA-256, 1024 iterations, 32-byte salt and key, base64.
    ///
    /// 1024 iterations is far below current guidance; prefer one of the
    /// presets for new deployments.
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            iterations: DEFAULT_ITERATIONS,
            salt_length: DEFAULT_SALT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
            text_encoding: TextEncoding::Base64,
        }
    }
}

impl HashConfig {
    const fn with_iterations(iterations: u32) -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            iterations,
            salt_length: DEFAULT_SALT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
            text_encoding: TextEncoding::Base64,
        }
    }

    /// Interactive profile: Fast, suitable for interactive logins.
    /// - Iterations: 100,000
    #[must_use]
    pub const fn interactive() -> Self {
        Self::with_iterations(100_000)
    }

    /// Moderate profile: Balanced security and performance.
    /// - Iterations: 310,000
    #[must_use]
    pub const fn moderate() -> Self {
        Self::with_iterations(310_000)
    }

    /// Sensitive profile: High security, slower computation.
    /// - Iterations: 600,000
    #[must_use]
    pub const fn sensitive() -> Self {
        Self::with_iterations(600_000)
    }

    /// Checks that every parameter is usable for generation.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if the iteration count, salt
    /// length or key length is zero.
    pub fn validate(&self) -> HashResult<()> {
        if self.iterations == 0 {
            return Err(HashError::InvalidParameters("iterations must be at least 1"));
        }
        if self.salt_length == 0 {
            return Err(HashError::InvalidParameters("salt length must be at least 1"));
        }
        if self.key_length == 0 {
            return Err(HashError::InvalidParameters("key length must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = HashConfig::default();
        assert_eq!(config.algorithm, Algorithm::Sha256);
        assert_eq!(config.iterations, 1024);
        assert_eq!(config.salt_length, 32);
        assert_eq!(config.key_length, 32);
        assert_eq!(config.text_encoding, TextEncoding::Base64);
    }

    #[test]
    fn test_presets() {
        assert_eq!(HashConfig::interactive().iterations, 100_000);
        assert_eq!(HashConfig::moderate().iterations, 310_000);
        assert_eq!(HashConfig::sensitive().iterations, 600_000);

        for config in [
            HashConfig::interactive(),
            HashConfig::moderate(),
            HashConfig::sensitive(),
        ] {
            assert!(config.validate().is_ok());
            assert!(config.iterations >= RECOMMENDED_MIN_ITERATIONS);
        }
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = HashConfig {
            iterations: 0,
            ..HashConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HashError::InvalidParameters(_))
        ));

        let config = HashConfig {
            salt_length: 0,
            ..HashConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HashError::InvalidParameters(_))
        ));

        let config = HashConfig {
            key_length: 0,
            ..HashConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HashError::InvalidParameters(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial_config() {
        let config: HashConfig =
            serde_json::from_str(r#"{"algorithm":"sha512","iterations":20000,"text_encoding":"hex"}"#)
                .expect("valid config");
        assert_eq!(config.algorithm, Algorithm::Sha512);
        assert_eq!(config.iterations, 20_000);
        assert_eq!(config.salt_length, DEFAULT_SALT_LENGTH);
        assert_eq!(config.text_encoding, TextEncoding::Hex);

        let json = serde_json::to_string(&config).expect("serializable");
        assert!(json.contains(r#""algorithm":"sha512""#));
    }
}
