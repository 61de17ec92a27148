//! Password hash value types.
//!
//! - [`PasswordHash`] - Self-describing hash (`{alg}:{iterations}:{salt}:{key}`)

mod password_hash;

pub use password_hash::PasswordHash;
