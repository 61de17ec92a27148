//! Text encoding and field layout for stored hash strings.
//!
//! Encoded hashes follow the format:
//! `{algorithm}:{iterations}:{salt}:{derived_key}` where the byte fields
//! are text-encoded with base64 (standard alphabet, padded) or lower-case hex.
//! Neither alphabet contains the `:` delimiter.

use base64::prelude::*;

use crate::core::error::{HashError, HashResult};

/// Field delimiter in encoded hash strings.
pub const DELIMITER: char = ':';

/// Number of fields in an encoded hash string.
pub const FIELD_COUNT: usize = 4;

/// Text encoding applied to the salt and derived key fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextEncoding {
    /// RFC 4648 base64, standard alphabet with padding.
    #[default]
    Base64,
    /// Lower-case hexadecimal. Upper-case input is accepted when decoding.
    Hex,
}

impl TextEncoding {
    /// Encodes bytes as text.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Base64 => BASE64_STANDARD.encode(bytes),
            Self::Hex => hex::encode(bytes),
        }
    }

    /// Decodes text back to bytes.
    ///
    /// # Errors
    ///
    /// Returns `HashError::MalformedHash` if the text is not valid in this encoding.
    pub fn decode(self, text: &str) -> HashResult<Vec<u8>> {
        match self {
            Self::Base64 => BASE64_STANDARD
                .decode(text)
                .map_err(|_| HashError::MalformedHash),
            Self::Hex => hex::decode(text).map_err(|_| HashError::MalformedHash),
        }
    }
}

/// Splits an encoded hash into exactly four fields.
///
/// # Errors
///
/// Returns `HashError::MalformedHash` if the string does not contain exactly
/// four `:`-separated fields.
pub fn split_fields(encoded: &str) -> HashResult<[&str; FIELD_COUNT]> {
    let mut parts = encoded.split(DELIMITER);

    let fields = [
        parts.next().ok_or(HashError::MalformedHash)?,
        parts.next().ok_or(HashError::MalformedHash)?,
        parts.next().ok_or(HashError::MalformedHash)?,
        parts.next().ok_or(HashError::MalformedHash)?,
    ];

    if parts.next().is_some() {
        return Err(HashError::MalformedHash);
    }

    Ok(fields)
}

/// Joins fields with the delimiter.
#[must_use]
pub fn join_fields(fields: [&str; FIELD_COUNT]) -> String {
    fields.join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_valid() -> HashResult<()> {
        let [algorithm, iterations, salt, key] = split_fields("sha256:1024:c2FsdA==:a2V5")?;
        assert_eq!(algorithm, "sha256");
        assert_eq!(iterations, "1024");
        assert_eq!(salt, "c2FsdA==");
        assert_eq!(key, "a2V5");
        Ok(())
    }

    #[test]
    fn test_split_fields_too_few() {
        assert!(matches!(
            split_fields("not:enough:fields"),
            Err(HashError::MalformedHash)
        ));
        assert!(matches!(split_fields("sha256"), Err(HashError::MalformedHash)));
        assert!(matches!(split_fields(""), Err(HashError::MalformedHash)));
    }

    #[test]
    fn test_split_fields_too_many() {
        assert!(matches!(
            split_fields("sha256:1024:c2FsdA==:a2V5:extra"),
            Err(HashError::MalformedHash)
        ));
        assert!(matches!(
            split_fields("sha256:1024:c2FsdA==:a2V5:"),
            Err(HashError::MalformedHash)
        ));
    }

    #[test]
    fn test_split_fields_empty_fields_are_fields() -> HashResult<()> {
        let fields = split_fields(":::")?;
        assert_eq!(fields, ["", "", "", ""]);
        Ok(())
    }

    #[test]
    fn test_join_fields() {
        assert_eq!(
            join_fields(["sha1", "1", "AA==", "AQ=="]),
            "sha1:1:AA==:AQ=="
        );
    }

    #[test]
    fn test_base64_encoding() -> HashResult<()> {
        let encoded = TextEncoding::Base64.encode(b"salt");
        assert_eq!(encoded, "c2FsdA==");
        assert_eq!(TextEncoding::Base64.decode(&encoded)?, b"salt");
        Ok(())
    }

    #[test]
    fn test_hex_encoding() -> HashResult<()> {
        let encoded = TextEncoding::Hex.encode(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(encoded, "deadbeef");
        assert_eq!(TextEncoding::Hex.decode("DEADBEEF")?, [0xde, 0xad, 0xbe, 0xef]);
        Ok(())
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(
            TextEncoding::Base64.decode("not base64!"),
            Err(HashError::MalformedHash)
        ));
        assert!(matches!(
            TextEncoding::Hex.decode("abc"),
            Err(HashError::MalformedHash)
        ));
        assert!(matches!(
            TextEncoding::Hex.decode("zz"),
            Err(HashError::MalformedHash)
        ));
    }

    #[test]
    fn test_encodings_never_emit_delimiter() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert!(!TextEncoding::Base64.encode(&bytes).contains(DELIMITER));
        assert!(!TextEncoding::Hex.encode(&bytes).contains(DELIMITER));
    }
}
