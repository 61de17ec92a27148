//! Keyed-hash algorithms usable as the PBKDF2 pseudorandom function.
//!
//! Each variant names an HMAC construction over a hash function from the
//! `sha1`/`sha2` crates. The set is closed: any other name is rejected when
//! it is parsed, so derivation can never start with an unknown algorithm.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::HashError;

/// A supported HMAC hash function.
///
/// Names are matched case-insensitively when parsed and are always written
/// in lower case, which is the form stored in encoded hashes.
///
/// # Example
///
/// ```rust
/// use pbkdf2_hash::Algorithm;
///
/// let algorithm: Algorithm = "SHA256".parse().expect("supported");
/// assert_eq!(algorithm, Algorithm::Sha256);
/// assert_eq!(algorithm.to_string(), "sha256");
/// assert_eq!(algorithm.output_len(), 32);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// HMAC-SHA-1. Kept for RFC 6070 conformance and old records.
    Sha1,
    /// HMAC-SHA-224.
    Sha224,
    /// HMAC-SHA-256. The default.
    #[default]
    Sha256,
    /// HMAC-SHA-384.
    Sha384,
    /// HMAC-SHA-512.
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, weakest first.
    pub const ALL: [Self; 5] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// The identifier written into encoded hashes (e.g. "sha256").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// HMAC output length in bytes (`hLen` in RFC 2898).
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| HashError::UnsupportedAlgorithm(name.to_string()))
    }
}

impl TryFrom<&str> for Algorithm {
    type Error = HashError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Algorithm::Sha1.name(), "sha1");
        assert_eq!(Algorithm::Sha224.name(), "sha224");
        assert_eq!(Algorithm::Sha256.name(), "sha256");
        assert_eq!(Algorithm::Sha384.name(), "sha384");
        assert_eq!(Algorithm::Sha512.name(), "sha512");
    }

    #[test]
    fn test_output_lengths() {
        assert_eq!(Algorithm::Sha1.output_len(), 20);
        assert_eq!(Algorithm::Sha224.output_len(), 28);
        assert_eq!(Algorithm::Sha256.output_len(), 32);
        assert_eq!(Algorithm::Sha384.output_len(), 48);
        assert_eq!(Algorithm::Sha512.output_len(), 64);
    }

    #[test]
    fn test_parse_roundtrip() -> Result<(), HashError> {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse()?;
            assert_eq!(parsed, algorithm);
        }
        Ok(())
    }

    #[test]
    fn test_parse_case_insensitive() -> Result<(), HashError> {
        assert_eq!("SHA256".parse::<Algorithm>()?, Algorithm::Sha256);
        assert_eq!("Sha512".parse::<Algorithm>()?, Algorithm::Sha512);
        assert_eq!(Algorithm::try_from("sHa1")?, Algorithm::Sha1);
        Ok(())
    }

    #[test]
    fn test_parse_unsupported() {
        let result = "md5".parse::<Algorithm>();
        assert!(matches!(result, Err(HashError::UnsupportedAlgorithm(ref name)) if name == "md5"));

        let result = "sha-256".parse::<Algorithm>();
        assert!(matches!(result, Err(HashError::UnsupportedAlgorithm(_))));

        let result = "".parse::<Algorithm>();
        assert!(matches!(result, Err(HashError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_default() {
        assert_eq!(Algorithm::default(), Algorithm::Sha256);
    }
}
