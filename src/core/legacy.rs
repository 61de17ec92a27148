//! Legacy split salt/hash scheme.
//!
//! Older deployments stored the salt and the derived key in two separate
//! base64 columns and took the algorithm and iteration count from
//! application configuration instead of the record. That scheme also fed the
//! base64 *text* of the salt, not the raw salt bytes, into PBKDF2.
//!
//! # Security Warning
//!
//! **Records in this format do not carry their own work factor.** Changing
//! the configured iteration count silently invalidates every stored hash.
//!
//! Use this module only to verify existing records and re-hash them with
//! [`PasswordHash::generate`](crate::core::types::PasswordHash::generate)
//! on the next successful login.

#![allow(deprecated)]

use core::fmt::{self, Debug};

use base64::prelude::*;

use crate::core::config::HashConfig;
use crate::core::error::HashResult;
use crate::core::operations::compare::equals;
use crate::core::operations::pbkdf2::derive;
use crate::core::operations::salt::generate_salt;

/// Salt length in raw bytes used by the legacy scheme (32 base64 characters).
pub const LEGACY_SALT_LENGTH: usize = 24;

/// Derived key length in bytes used by the legacy scheme (32 base64 characters).
pub const LEGACY_KEY_LENGTH: usize = 24;

/// A legacy password record: base64 salt text and base64 derived key.
///
/// # Security Warning
///
/// **The algorithm and iteration count are not part of the record.** Use
/// [`PasswordHash`](crate::core::types::PasswordHash) for new hashes.
#[deprecated(
    since = "0.1.0",
    note = "Legacy records do not store their parameters. Use PasswordHash instead."
)]
#[derive(Clone)]
pub struct LegacyHash {
    /// Base64 of the random salt bytes. This text is the PBKDF2 salt.
    pub salt: String,
    /// Base64 of the derived key.
    pub hash: String,
}

impl LegacyHash {
    /// Configuration matching the legacy defaults: SHA-256, 1024 iterations,
    /// 24-byte salt and key.
    #[must_use]
    pub fn default_config() -> HashConfig {
        HashConfig {
            salt_length: LEGACY_SALT_LENGTH,
            key_length: LEGACY_KEY_LENGTH,
            ..HashConfig::default()
        }
    }

    /// Hashes `password` in the legacy layout.
    ///
    /// Both fields are always base64; `config.text_encoding` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` for an invalid configuration or
    /// `HashError::EntropySourceUnavailable` if no salt can be generated.
    pub fn generate(password: &[u8], config: &HashConfig) -> HashResult<Self> {
        config.validate()?;

        let salt = BASE64_STANDARD.encode(generate_salt(config.salt_length)?);
        let derived_key = derive(
            config.algorithm,
            password,
            salt.as_bytes(),
            config.iterations,
            config.key_length,
        )?;

        tracing::debug!(
            algorithm = %config.algorithm,
            iterations = config.iterations,
            "generated legacy password hash"
        );

        Ok(Self {
            salt,
            hash: BASE64_STANDARD.encode(&*derived_key),
        })
    }

    /// Checks `password` using the algorithm and iteration count from `config`.
    ///
    /// An undecodable or empty `hash` field is reported as a non-match.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `config.iterations` is zero.
    pub fn verify(&self, password: &[u8], config: &HashConfig) -> HashResult<bool> {
        let stored = match BASE64_STANDARD.decode(&self.hash) {
            Ok(stored) if !stored.is_empty() => stored,
            _ => {
                tracing::debug!("legacy password hash is malformed; treating as mismatch");
                return Ok(false);
            }
        };

        let candidate = derive(
            config.algorithm,
            password,
            self.salt.as_bytes(),
            config.iterations,
            stored.len(),
        )?;

        Ok(equals(&candidate, &stored))
    }
}

impl Debug for LegacyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyHash")
            .field("salt", &self.salt)
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for LegacyHash {
    fn eq(&self, other: &Self) -> bool {
        let salt = equals(self.salt.as_bytes(), other.salt.as_bytes());
        let hash = equals(self.hash.as_bytes(), other.hash.as_bytes());
        salt & hash
    }
}

impl Eq for LegacyHash {}
