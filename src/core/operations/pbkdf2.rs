//! PBKDF2 key derivation (RFC 2898, section 5.2) with HMAC as the PRF.
//!
//! ```text
//! T_i = U_1 ^ U_2 ^ ... ^ U_c
//! U_1 = PRF(P, S || INT_32_BE(i))
//! U_j = PRF(P, U_{j-1})
//! DK  = T_1 || T_2 || ... || T_l   (truncated to dkLen)
//! ```
//!
//! Running time is proportional to `iterations * block_count` and never
//! depends on the password, salt or intermediate values.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::{Zeroize, Zeroizing};

use crate::core::algorithm::Algorithm;
use crate::core::error::{HashError, HashResult};

/// Derives `key_length` bytes from `password` and `salt`.
///
/// # Arguments
///
/// * `algorithm` - HMAC hash function
/// * `password` - The password (HMAC key)
/// * `salt` - The salt
/// * `iterations` - Work factor, at least 1
/// * `key_length` - Output length in bytes, at least 1
///
/// # Errors
///
/// Returns `HashError::InvalidParameters` if `iterations` or `key_length` is
/// zero or `key_length` exceeds `(2^32 - 1) * hLen`. No hashing is done in
/// that case.
///
/// # Example
///
/// ```rust
/// use pbkdf2_hash::{derive, Algorithm};
///
/// let key = derive(Algorithm::Sha1, b"password", b"salt", 1, 20).expect("valid parameters");
/// assert_eq!(hex::encode(&*key), "0c60c80f961f0e71f3a9b524af6012062fe037a6");
/// ```
pub fn derive(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_length: usize,
) -> HashResult<Zeroizing<Vec<u8>>> {
    let mut output = Zeroizing::new(vec![0u8; key_length]);
    derive_into(algorithm, password, salt, iterations, &mut output)?;
    Ok(output)
}

/// Derives `output.len()` bytes into a caller-provided buffer.
///
/// # Errors
///
/// Same as [`derive`], with `key_length = output.len()`.
pub fn derive_into(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output: &mut [u8],
) -> HashResult<()> {
    validate(algorithm, iterations, output.len())?;

    let block_len = algorithm.output_len();
    match algorithm {
        Algorithm::Sha1 => pbkdf2_hmac::<Hmac<Sha1>>(password, salt, iterations, block_len, output),
        Algorithm::Sha224 => {
            pbkdf2_hmac::<Hmac<Sha224>>(password, salt, iterations, block_len, output)
        }
        Algorithm::Sha256 => {
            pbkdf2_hmac::<Hmac<Sha256>>(password, salt, iterations, block_len, output)
        }
        Algorithm::Sha384 => {
            pbkdf2_hmac::<Hmac<Sha384>>(password, salt, iterations, block_len, output)
        }
        Algorithm::Sha512 => {
            pbkdf2_hmac::<Hmac<Sha512>>(password, salt, iterations, block_len, output)
        }
    }
}

/// Rejects parameters before any hashing work begins.
fn validate(algorithm: Algorithm, iterations: u32, key_length: usize) -> HashResult<()> {
    if iterations == 0 {
        return Err(HashError::InvalidParameters("iterations must be at least 1"));
    }
    if key_length == 0 {
        return Err(HashError::InvalidParameters("key length must be at least 1"));
    }

    let block_count = key_length.div_ceil(algorithm.output_len());
    if u32::try_from(block_count).is_err() {
        return Err(HashError::InvalidParameters("derived key too long"));
    }

    Ok(())
}

/// Fills `output` block by block with the PBKDF2 stream for PRF `M`.
///
/// `block_len` must equal the output length of `M`.
fn pbkdf2_hmac<M>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    block_len: usize,
    output: &mut [u8],
) -> HashResult<()>
where
    M: Mac + KeyInit + Clone,
{
    // Keyed once; each PRF call clones the keyed state. HMAC hashes keys
    // longer than its block size, so keying does not fail for any password.
    let prf = <M as KeyInit>::new_from_slice(password).map_err(|_| HashError::CryptoError)?;

    for (index, chunk) in output.chunks_mut(block_len).enumerate() {
        let block_index = u32::try_from(index + 1)
            .map_err(|_| HashError::InvalidParameters("derived key too long"))?;

        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&block_index.to_be_bytes());
        let mut u = mac.finalize().into_bytes();
        let mut t = u.clone();

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            for (t_byte, u_byte) in t.iter_mut().zip(u.iter()) {
                *t_byte ^= u_byte;
            }
        }

        chunk.copy_from_slice(&t.as_slice()[..chunk.len()]);
        u.as_mut_slice().zeroize();
        t.as_mut_slice().zeroize();
    }

    Ok(())
}
