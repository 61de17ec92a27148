//! Test vector types for PBKDF2 and the stored hash format.
//!
//! The raw PBKDF2 suites carry the published RFC 6070 (HMAC-SHA1) and
//! RFC 7914 (HMAC-SHA256) vectors plus SHA-2 vectors cross-checked against an
//! independent implementation. The encoded suite pins the `alg:iter:salt:key`
//! layout in both text encodings.

// Some fields are required for deserialization but not read by every test
#![allow(dead_code)]

use pbkdf2_hash::TextEncoding;
use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

// =============================================================================
// Raw PBKDF2
// =============================================================================

/// Test vector for a single PBKDF2 derivation.
#[derive(Debug, Deserialize)]
pub struct DeriveTestVector {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Algorithm name as written in stored hashes
    pub algorithm: String,
    /// Password as UTF-8 text, used verbatim as bytes
    pub password: String,
    /// Salt as UTF-8 text, used verbatim as bytes
    pub salt: String,
    pub iterations: u32,
    #[serde(rename = "key-length")]
    pub key_length: usize,
    /// Hex-encoded derived key
    pub dk: String,
}

// =============================================================================
// Encoded Hashes
// =============================================================================

/// Test vector for a stored `alg:iter:salt:key` string.
#[derive(Debug, Deserialize)]
pub struct EncodedTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// `base64` or `hex`
    pub encoding: String,
    pub password: String,
    /// The stored hash string
    pub hash: String,
    /// Expected algorithm (null for fail tests)
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Expected iteration count (null for fail tests)
    #[serde(default)]
    pub iterations: Option<u32>,
    /// Hex-encoded salt bytes (null for fail tests)
    #[serde(default)]
    pub salt: Option<String>,
    /// Hex-encoded derived key (null for fail tests)
    #[serde(default)]
    pub dk: Option<String>,
}

impl EncodedTestVector {
    /// The text encoding this vector is written in.
    pub fn text_encoding(&self) -> TextEncoding {
        match self.encoding.as_str() {
            "base64" => TextEncoding::Base64,
            "hex" => TextEncoding::Hex,
            other => panic!("Test '{}' has unknown encoding {other}", self.name),
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
