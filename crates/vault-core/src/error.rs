//! Error types for Vault Core

use thiserror::Error;

use crate::config::ConfigError;
use crate::secret::KeyError;

/// Errors that can occur while preparing SDK state
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
