#![no_main]

use libfuzzer_sys::fuzz_target;
use pbkdf2_hash::{PasswordHash, TextEncoding};

fuzz_target!(|data: &str| {
    // Try parsing under each encoding - should never panic
    for encoding in [TextEncoding::Base64, TextEncoding::Hex] {
        if let Ok(hash) = PasswordHash::decode(data, encoding) {
            // Anything that parses must survive a re-encode
            let reparsed = PasswordHash::decode(&hash.encode(encoding), encoding);
            assert!(reparsed.is_ok_and(|h| h == hash));
        }
    }
});
