//! Error types for Vault Signing

use thiserror::Error;

/// Errors that can occur during canonicalization or signing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("payload contains a value that cannot be canonicalized: {0}")]
    InvalidPayloadType(String),
}

impl From<serde_json::Error> for SigningError {
    fn from(err: serde_json::Error) -> Self {
        SigningError::InvalidPayloadType(err.to_string())
    }
}
