//! Build script for pbkdf2-hash.
//!
//! This emits compile-time warnings for security-sensitive feature flags.

fn main() {
    // Emit a compile-time warning when the legacy feature is enabled
    #[cfg(feature = "legacy")]
    {
        // Note: Using single-colon syntax for MSRV 1.75.0 compatibility
        println!("cargo:warning=SECURITY WARNING: The 'legacy' feature is enabled.");
        println!("cargo:warning=The legacy scheme stores salt and hash separately and reads its work factor from configuration.");
        println!("cargo:warning=Use it only to verify and migrate old records; new hashes should use the self-describing format.");
    }
}
