#![no_main]

use libfuzzer_sys::fuzz_target;
use pbkdf2_hash::{verify_password, HashConfig, PasswordHash};

fuzz_target!(|data: &str| {
    let config = HashConfig::default();

    // Anything that does not parse is a plain mismatch, never an error
    let Ok(hash) = PasswordHash::try_from(data) else {
        assert!(matches!(verify_password(b"password", data, &config), Ok(false)));
        return;
    };

    // Keep the work factor bounded so the fuzzer measures parsing, not PBKDF2
    if hash.iterations() <= 64 && hash.derived_key().len() <= 256 {
        let result = verify_password(b"password", data, &config);
        assert!(result.is_ok(), "well-formed hash failed to verify: {result:?}");
    }
});
