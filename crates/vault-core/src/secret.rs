//! Secret key handling for request signing.
//!
//! Client secrets arrive as hex-encoded text and are decoded exactly once,
//! when the configuration is built. The resulting [`SecretKey`] is an opaque
//! byte buffer: it is never re-parsed per signing call and its `Debug`
//! output is redacted so the key cannot leak through logs.

use std::fmt;

use thiserror::Error;

/// Errors raised when constructing a [`SecretKey`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("secret key is empty")]
    Empty,

    #[error("secret key is not valid hex: {0}")]
    InvalidHex(String),
}

/// An opaque symmetric signing key shared with the remote verifier
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Decode a key from its hex representation.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Empty`] for an empty string and
    /// [`KeyError::InvalidHex`] for odd-length or non-hex input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vault_core::SecretKey;
    ///
    /// let key = SecretKey::from_hex("ab").unwrap();
    /// assert_eq!(key.as_bytes(), &[0xab]);
    /// ```
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        if hex_str.is_empty() {
            return Err(KeyError::Empty);
        }

        let bytes = hex::decode(hex_str).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
        Self::from_bytes(bytes)
    }

    /// Wrap raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Empty`] if the buffer is empty.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(KeyError::Empty);
        }

        Ok(Self(bytes))
    }

    /// Raw key bytes, for keying the MAC.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; empty keys are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}
