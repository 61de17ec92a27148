//! Constant-time byte comparison.
//!
//! Every secret-vs-secret comparison in this crate goes through [`equals`].
//! The standard `==` on slices may return at the first differing byte.

use subtle::{Choice, ConstantTimeEq};

/// Compares two byte sequences without data-dependent early exit.
///
/// The length check is folded into the result rather than returned early, and
/// the shared prefix is always scanned in full, so running time depends only on
/// the input lengths.
///
/// # Example
///
/// ```rust
/// use pbkdf2_hash::equals;
///
/// assert!(equals(b"secret", b"secret"));
/// assert!(!equals(b"secret", b"secreT"));
/// assert!(!equals(b"secret", b"secret!"));
/// ```
#[must_use]
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    let mut result: Choice = a.len().ct_eq(&b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        result &= x.ct_eq(y);
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        assert!(equals(b"", b""));
        assert!(equals(&[0u8; 32], &[0u8; 32]));
        assert!(equals(b"password", b"password"));
    }

    #[test]
    fn test_first_byte_differs() {
        let a = [0x11u8; 32];
        let mut b = a;
        b[0] ^= 0x01;
        assert!(!equals(&a, &b));
    }

    #[test]
    fn test_last_byte_differs() {
        let a = [0x11u8; 32];
        let mut b = a;
        b[31] ^= 0x80;
        assert!(!equals(&a, &b));
    }

    #[test]
    fn test_length_mismatch_with_shared_prefix() {
        assert!(!equals(b"abc", b"abcd"));
        assert!(!equals(b"abcd", b"abc"));
        assert!(!equals(b"", b"a"));
    }

    #[test]
    fn test_matches_standard_equality() {
        let samples: [&[u8]; 5] = [b"", b"a", b"ab", b"ba", b"abc"];
        for a in samples {
            for b in samples {
                assert_eq!(equals(a, b), a == b);
            }
        }
    }
}
