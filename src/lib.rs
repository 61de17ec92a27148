//! PBKDF2 password hashing with a self-describing storage format.
//!
//! This crate derives password hashes with PBKDF2 (RFC 2898) using HMAC as
//! the pseudorandom function, bundles the parameters needed to re-derive them
//! into one storable string, and verifies passwords against that string with
//! a constant-time comparison.
//!
//! # Quick Start
//!
//! ```rust
//! use pbkdf2_hash::{generate_hash, verify_password, HashConfig};
//!
//! let config = HashConfig::default();
//!
//! // On account creation or password change: persist `stored` verbatim
//! let stored = generate_hash(b"correct horse battery staple", &config)
//!     .expect("generate should succeed");
//! assert!(stored.starts_with("sha256:1024:"));
//!
//! // On login
//! let ok = verify_password(b"correct horse battery staple", &stored, &config)
//!     .expect("verify should succeed");
//! assert!(ok);
//! ```
//!
//! # Stored Format
//!
//! | Field | Example | Description |
//! |-------|---------|-------------|
//! | algorithm | `sha256` | HMAC hash function |
//! | iterations | `1024` | PBKDF2 work factor |
//! | salt | `AAECAwQF...` | Random salt, base64 or hex |
//! | derived key | `/+cYfq3l...` | PBKDF2 output, base64 or hex |
//!
//! Fields are joined with `:`. Verification reads the algorithm and iteration
//! count from the stored string, so the work factor can be raised for new
//! hashes without invalidating old ones.
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! pbkdf2-hash = "0.1"                                          # prelude (default)
//! pbkdf2-hash = { version = "0.1", features = ["serde"] }      # serde for HashConfig
//! pbkdf2-hash = { version = "0.1", features = ["legacy"] }     # deprecated split salt/hash
//! ```
//!
//! # Security
//!
//! - Salts come from the OS RNG only, and are never accepted for generation
//! - Derived keys are zeroized on drop
//! - Debug output redacts derived keys
//! - Secret comparisons are constant-time
//! - A malformed stored hash, or one naming an unknown algorithm, verifies as
//!   `false`, never as an error
//! - No unsafe code
//!
//! Derivation is CPU-bound and blocks for a time proportional to the
//! iteration count; async callers should run it on a blocking worker.
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::algorithm::Algorithm;
pub use core::config::HashConfig;
pub use core::encoding::TextEncoding;
pub use core::error::{HashError, HashResult};
pub use core::types::PasswordHash;

// Re-export the operations
pub use core::operations::compare::equals;
pub use core::operations::pbkdf2::{derive, derive_into};
pub use core::operations::salt::generate_salt;
pub use core::operations::verify::{generate_hash, verify_password};

#[cfg(feature = "legacy")]
#[allow(deprecated)]
pub use core::legacy::LegacyHash;
