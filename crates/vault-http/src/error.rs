//! HTTP error types for the Vault API client

use reqwest::StatusCode;
use thiserror::Error;
use vault_signing::SigningError;

/// Errors surfaced by [`VaultClient`](crate::VaultClient)
#[derive(Debug, Error)]
pub enum VaultHttpError {
    #[error("request signing failed: {0}")]
    Signing(#[from] SigningError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service replied with a non-2xx status.
    #[error("API error [{status}]: {body}")]
    Api { status: StatusCode, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(String),

    #[error("expected a response body, got none")]
    EmptyBody,
}
