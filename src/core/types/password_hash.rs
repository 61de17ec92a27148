//! `PasswordHash` - Self-describing PBKDF2 password hash.
//!
//! This module provides the `PasswordHash` value type together with its
//! storable text form.
//!
//! Format: `{algorithm}:{iterations}:{encode(salt)}:{encode(derived_key)}`

use core::fmt::{self, Debug, Display};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::algorithm::Algorithm;
use crate::core::config::{HashConfig, RECOMMENDED_MIN_ITERATIONS};
use crate::core::encoding::{join_fields, split_fields, TextEncoding};
use crate::core::error::{HashError, HashResult};
use crate::core::operations::compare::equals;
use crate::core::operations::pbkdf2::derive;
use crate::core::operations::salt::generate_salt;

/// A PBKDF2 password hash with the parameters needed to re-derive it.
///
/// Format: `{algorithm}:{iterations}:{salt}:{derived_key}`
///
/// Values are immutable once created. A hash is generated once per password
/// change, encoded immediately, and reconstructed from its encoded form on
/// every verification.
///
/// # Security
///
/// - The salt is always generated internally; it cannot be supplied for generation
/// - The derived key is zeroized on drop
/// - Debug output redacts the derived key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use pbkdf2_hash::{HashConfig, PasswordHash, TextEncoding};
///
/// let config = HashConfig::default();
/// let (hash, encoded) = PasswordHash::generate(b"hunter2", &config).expect("generate");
/// assert!(encoded.starts_with("sha256:1024:"));
///
/// let parsed = PasswordHash::decode(&encoded, TextEncoding::Base64).expect("well-formed");
/// assert_eq!(parsed, hash);
/// assert!(parsed.matches(b"hunter2").expect("derive"));
/// assert!(!parsed.matches(b"hunter3").expect("derive"));
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PasswordHash {
    #[zeroize(skip)]
    algorithm: Algorithm,
    #[zeroize(skip)]
    iterations: u32,
    salt: Vec<u8>,
    derived_key: Vec<u8>,
}

impl PasswordHash {
    /// Creates a `PasswordHash` from already-derived parts.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `iterations` is zero or
    /// `derived_key` is empty.
    pub fn from_parts(
        algorithm: Algorithm,
        iterations: u32,
        salt: Vec<u8>,
        derived_key: Vec<u8>,
    ) -> HashResult<Self> {
        if iterations == 0 {
            return Err(HashError::InvalidParameters("iterations must be at least 1"));
        }
        if derived_key.is_empty() {
            return Err(HashError::InvalidParameters("key length must be at least 1"));
        }

        Ok(Self {
            algorithm,
            iterations,
            salt,
            derived_key,
        })
    }

    /// Hashes `password` with a freshly generated salt.
    ///
    /// Returns the hash together with its encoding under
    /// `config.text_encoding`, which is the value to persist.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if the configuration is invalid
    /// (checked before any entropy is consumed) or
    /// `HashError::EntropySourceUnavailable` if no salt can be generated.
    pub fn generate(password: &[u8], config: &HashConfig) -> HashResult<(Self, String)> {
        config.validate()?;

        if config.iterations < RECOMMENDED_MIN_ITERATIONS {
            tracing::warn!(
                iterations = config.iterations,
                recommended = RECOMMENDED_MIN_ITERATIONS,
                "generating password hash with a low iteration count"
            );
        }

        let salt = generate_salt(config.salt_length)?;
        let derived_key = derive(
            config.algorithm,
            password,
            &salt,
            config.iterations,
            config.key_length,
        )?;

        let hash = Self {
            algorithm: config.algorithm,
            iterations: config.iterations,
            salt,
            derived_key: derived_key.to_vec(),
        };
        let encoded = hash.encode(config.text_encoding);

        tracing::debug!(
            algorithm = %hash.algorithm,
            iterations = hash.iterations,
            salt_len = hash.salt.len(),
            key_len = hash.derived_key.len(),
            "generated password hash"
        );

        Ok((hash, encoded))
    }

    /// Returns the HMAC hash function.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the iteration count.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the salt bytes.
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Returns the derived key bytes.
    #[must_use]
    pub fn derived_key(&self) -> &[u8] {
        &self.derived_key
    }

    /// Serializes to `{algorithm}:{iterations}:{salt}:{derived_key}`.
    #[must_use]
    pub fn encode(&self, encoding: TextEncoding) -> String {
        let iterations = self.iterations.to_string();
        let salt = encoding.encode(&self.salt);
        let derived_key = encoding.encode(&self.derived_key);
        join_fields([self.algorithm.name(), &iterations, &salt, &derived_key])
    }

    /// Parses an encoded hash.
    ///
    /// Only structural well-formedness is checked; nothing is derived.
    ///
    /// # Errors
    ///
    /// Returns `HashError::MalformedHash` if the field count is not exactly
    /// four, the iteration count is not a positive decimal integer, or the
    /// salt or derived key cannot be decoded (or the key is empty).
    /// Returns `HashError::UnsupportedAlgorithm` if the string is well-formed
    /// but names an algorithm this crate does not provide.
    pub fn decode(encoded: &str, encoding: TextEncoding) -> HashResult<Self> {
        let [algorithm, iterations, salt, derived_key] = split_fields(encoded)?;

        let iterations = parse_iterations(iterations)?;
        let salt = encoding.decode(salt)?;
        let derived_key = encoding.decode(derived_key)?;
        if derived_key.is_empty() {
            return Err(HashError::MalformedHash);
        }

        let algorithm = algorithm.parse::<Algorithm>()?;

        Ok(Self {
            algorithm,
            iterations,
            salt,
            derived_key,
        })
    }

    /// Re-derives a key from `password` with this hash's parameters and
    /// compares it to the stored key in constant time.
    ///
    /// # Errors
    ///
    /// Returns an error only if derivation itself fails.
    pub fn matches(&self, password: &[u8]) -> HashResult<bool> {
        let candidate = derive(
            self.algorithm,
            password,
            &self.salt,
            self.iterations,
            self.derived_key.len(),
        )?;
        Ok(equals(&candidate, &self.derived_key))
    }
}

/// Parses a positive decimal iteration count. Signs and whitespace are rejected.
fn parse_iterations(field: &str) -> HashResult<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HashError::MalformedHash);
    }

    match field.parse::<u32>() {
        Ok(iterations) if iterations > 0 => Ok(iterations),
        _ => Err(HashError::MalformedHash),
    }
}

// =============================================================================
// Display (serialization with the default text encoding)
// =============================================================================

impl Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(TextEncoding::default()))
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("algorithm", &self.algorithm)
            .field("iterations", &self.iterations)
            .field("salt_len", &self.salt.len())
            .field("derived_key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// TryFrom (parsing with the default text encoding)
// =============================================================================

impl TryFrom<&str> for PasswordHash {
    type Error = HashError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        Self::decode(encoded, TextEncoding::default())
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = HashError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

// =============================================================================
// PartialEq (constant-time)
// =============================================================================

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        let params = self.algorithm == other.algorithm && self.iterations == other.iterations;
        let salt = equals(&self.salt, &other.salt);
        let derived_key = equals(&self.derived_key, &other.derived_key);
        params & salt & derived_key
    }
}

impl Eq for PasswordHash {}
