//! Core password hashing types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`algorithm`] - Supported HMAC hash functions
//! - [`config`] - Immutable hashing configuration
//! - [`encoding`] - Text encodings and the stored field layout
//! - [`error`] - Error types for hashing operations
//! - [`types`] - The [`PasswordHash`](types::PasswordHash) value type
//! - [`operations`] - Salt generation, PBKDF2, comparison, verification

pub mod algorithm;
pub mod config;
pub mod encoding;
pub mod error;
pub mod operations;
pub mod types;

#[cfg(feature = "legacy")]
pub mod legacy;

// Re-export commonly used items
pub use error::{HashError, HashResult};
