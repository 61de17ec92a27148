//! Builder patterns for password hashing.
//!
//! This module provides a fluent builder for [`HashConfig`] with preset
//! security profiles and terminal generate/verify methods.
//!
//! # Security Profiles
//!
//! | Profile | Iterations | Use Case |
//! |---------|------------|----------|
//! | `interactive()` | 100,000 | Fast, interactive logins |
//! | `moderate()` | 310,000 | Balanced security (default) |
//! | `sensitive()` | 600,000 | High-security, long-term storage |
//!
//! # Example
//!
//! ```rust
//! use pbkdf2_hash::prelude::*;
//!
//! // Customize parameters
//! let hasher = HasherBuilder::interactive()
//!     .algorithm(Algorithm::Sha512)
//!     .iterations(20_000)
//!     .text_encoding(TextEncoding::Hex);
//!
//! let stored = hasher.generate_hash(b"password").expect("generate should succeed");
//! assert!(stored.starts_with("sha512:20000:"));
//! assert!(hasher.verify_password(b"password", &stored).expect("verify should succeed"));
//! ```

use crate::core::algorithm::Algorithm;
use crate::core::config::HashConfig;
use crate::core::encoding::TextEncoding;
use crate::core::error::HashResult;
use crate::core::operations::verify::{generate_hash, verify_password};
use crate::core::types::PasswordHash;

/// Builder for password hashing parameters.
///
/// Holds an immutable [`HashConfig`]; every setter returns a new builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherBuilder {
    config: HashConfig,
}

impl Default for HasherBuilder {
    fn default() -> Self {
        Self::moderate()
    }
}

impl From<HashConfig> for HasherBuilder {
    fn from(config: HashConfig) -> Self {
        Self { config }
    }
}

impl HasherBuilder {
    /// Creates a new builder with default (moderate) parameters.
    ///
    /// Equivalent to calling `HasherBuilder::moderate()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::moderate()
    }

    /// Interactive profile: Fast enough for user logins.
    ///
    /// - Iterations: 100,000
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            config: HashConfig::interactive(),
        }
    }

    /// Moderate profile: Balanced security and performance.
    ///
    /// - Iterations: 310,000
    ///
    /// This is the recommended default for most applications.
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            config: HashConfig::moderate(),
        }
    }

    /// Sensitive profile: High security for long-term storage.
    ///
    /// - Iterations: 600,000
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            config: HashConfig::sensitive(),
        }
    }

    /// Sets the HMAC hash function.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Sets the number of iterations (work factor).
    ///
    /// Higher values increase the time required for key derivation,
    /// making brute-force attacks slower.
    #[must_use]
    pub const fn iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Sets the salt length in bytes.
    #[must_use]
    pub const fn salt_length(mut self, salt_length: usize) -> Self {
        self.config.salt_length = salt_length;
        self
    }

    /// Sets the derived key length in bytes.
    #[must_use]
    pub const fn key_length(mut self, key_length: usize) -> Self {
        self.config.key_length = key_length;
        self
    }

    /// Sets the text encoding of stored salt and key fields.
    #[must_use]
    pub const fn text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.config.text_encoding = text_encoding;
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub const fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hashes the password and returns the string to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or no salt can be
    /// generated.
    pub fn generate_hash(&self, password: &[u8]) -> HashResult<String> {
        generate_hash(password, &self.config)
    }

    /// Hashes the password and returns both the value and its encoding.
    ///
    /// # Errors
    ///
    /// Same as [`HasherBuilder::generate_hash`].
    pub fn generate(&self, password: &[u8]) -> HashResult<(PasswordHash, String)> {
        PasswordHash::generate(password, &self.config)
    }

    /// Checks the password against a stored hash string.
    ///
    /// A malformed record or one naming an unsupported algorithm verifies as
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns an error only if re-deriving the key fails.
    pub fn verify_password(&self, password: &[u8], stored: &str) -> HashResult<bool> {
        verify_password(password, stored, &self.config)
    }
}

impl From<HasherBuilder> for HashConfig {
    fn from(builder: HasherBuilder) -> Self {
        builder.config
    }
}
