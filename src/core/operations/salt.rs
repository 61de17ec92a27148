//! Random salt generation.
//!
//! Salts are drawn from the operating system RNG only. If it fails there is
//! no fallback to a user-space generator.

use rand_core::{OsRng, TryRngCore};

use crate::core::error::{HashError, HashResult};

/// Generates `length` cryptographically secure random bytes.
///
/// # Errors
///
/// Returns `HashError::InvalidParameters` if `length` is zero, or
/// `HashError::EntropySourceUnavailable` if the OS RNG cannot be read.
pub fn generate_salt(length: usize) -> HashResult<Vec<u8>> {
    if length == 0 {
        return Err(HashError::InvalidParameters("salt length must be at least 1"));
    }

    let mut salt = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|_| HashError::EntropySourceUnavailable)?;

    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_salt_length() -> HashResult<()> {
        for length in [1, 16, 24, 32, 64, 1000] {
            assert_eq!(generate_salt(length)?.len(), length);
        }
        Ok(())
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            generate_salt(0),
            Err(HashError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_salts_are_unique() -> HashResult<()> {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_salt(24)?));
        }
        assert_eq!(seen.len(), 1000);
        Ok(())
    }
}
