//! Cryptographic operations for password hashing.
//!
//! This module provides the building blocks behind [`PasswordHash`]:
//!
//! - [`salt`] - Random salt generation (OS RNG)
//! - [`pbkdf2`] - PBKDF2-HMAC key derivation
//! - [`compare`] - Constant-time byte comparison
//! - [`verify`] - Hash generation and password verification
//!
//! [`PasswordHash`]: crate::core::types::PasswordHash

pub mod compare;
pub mod pbkdf2;
pub mod salt;
pub mod verify;
