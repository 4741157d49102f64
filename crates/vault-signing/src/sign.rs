//! HMAC-SHA512 request signing

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha512;
use vault_core::SecretKey;

use crate::canonical::canonicalize;
use crate::error::SigningError;

type HmacSha512 = Hmac<Sha512>;

/// Header the signature travels in.
pub const SIGNATURE_HEADER: &str = "X-Vault-Signature";

/// Length of a rendered signature: a 512-bit digest as lowercase hex.
pub const SIGNATURE_HEX_LEN: usize = 128;

/// Canonicalize and sign a payload.
///
/// The payload is flattened through [`canonicalize`], UTF-8 encoded, and
/// fed to HMAC-SHA512 keyed with `key`. The digest is rendered as lowercase
/// hex with no separators, always [`SIGNATURE_HEX_LEN`] characters.
///
/// Pure and synchronous: no I/O, no shared state, safe to call from any
/// number of threads.
///
/// # Errors
///
/// Returns [`SigningError`] if the payload cannot be canonicalized. Key
/// validity is enforced when the [`SecretKey`] is constructed, never here.
///
/// # Example
///
/// ```rust
/// use vault_core::SecretKey;
/// use vault_signing::sign;
///
/// let key = SecretKey::from_hex("ab").unwrap();
/// let payload = serde_json::json!({"client_id": "abc"});
///
/// let signature = sign(&payload, &key).unwrap();
/// assert_eq!(signature.len(), 128);
/// assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn sign<T: Serialize>(payload: &T, key: &SecretKey) -> Result<String, SigningError> {
    let canonical = canonicalize(payload)?;
    Ok(sign_canonical(&canonical, key))
}

/// Sign an already-canonical string.
///
/// Signing the empty string is valid: it is the HMAC of an empty message,
/// which is what an empty mapping signs to.
pub fn sign_canonical(canonical: &str, key: &SecretKey) -> String {
    let mut mac = HmacSha512::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}

/// Verify a signature over a canonical string in constant time
///
/// # Example
///
/// ```rust
/// use vault_core::SecretKey;
/// use vault_signing::{sign_canonical, verify_signature};
///
/// let key = SecretKey::from_hex("ab").unwrap();
/// let signature = sign_canonical("client_id=abc", &key);
///
/// assert!(verify_signature("client_id=abc", &key, &signature));
/// assert!(!verify_signature("client_id=xyz", &key, &signature));
/// ```
pub fn verify_signature(canonical: &str, key: &SecretKey, expected: &str) -> bool {
    let computed = sign_canonical(canonical, key);
    constant_time_compare(&computed, expected)
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Validate signature format: exactly 128 lowercase hex characters.
pub fn is_valid_signature(signature: &str) -> bool {
    signature.len() == SIGNATURE_HEX_LEN
        && signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
