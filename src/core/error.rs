//! Error types for password hashing operations.
//!
//! This module provides a unified error type for hash generation, decoding
//! and verification. Error messages are intentionally terse and never carry
//! password, salt or key material.

use thiserror::Error;

/// Errors that can occur when generating, decoding or verifying password hashes.
#[derive(Debug, Error)]
pub enum HashError {
    /// The requested keyed-hash algorithm is not available.
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A work factor or length parameter is out of range (zero, or too large).
    #[error("Invalid parameters: {0}")]
    InvalidParameters(&'static str),

    /// The operating system could not supply secure random bytes.
    #[error("Entropy source unavailable")]
    EntropySourceUnavailable,

    /// The stored hash string is not structurally well-formed.
    /// Intentionally vague for security.
    #[error("Malformed password hash")]
    MalformedHash,

    /// The HMAC backend rejected the password as a key.
    ///
    /// Reserved: HMAC accepts keys of any length, so none of the supported
    /// algorithms produce this today. Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for password hashing operations.
pub type HashResult<T> = Result<T, HashError>;
