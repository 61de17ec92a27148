//! Ergonomic layer for password hashing.
//!
//! The prelude module provides convenient re-exports and the
//! [`HasherBuilder`] with preset parameter profiles.
//!
//! # Usage
//!
//! ```rust
//! use pbkdf2_hash::prelude::*;
//! ```

mod builders;

pub use builders::HasherBuilder;

// Re-export core types for convenience
pub use crate::core::algorithm::Algorithm;
pub use crate::core::config::HashConfig;
pub use crate::core::encoding::TextEncoding;
pub use crate::core::error::{HashError, HashResult};
pub use crate::core::operations::verify::{generate_hash, verify_password};
pub use crate::core::types::PasswordHash;
