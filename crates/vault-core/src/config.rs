//! Process-wide SDK configuration
//!
//! Credentials are checked when the configuration is built: the client
//! secret is hex-decoded into a [`SecretKey`] exactly once and carried as
//! raw bytes from then on. Nothing in the configuration mutates after load.

use thiserror::Error;

use crate::secret::{KeyError, SecretKey};

/// OAuth web host the authorize flow runs on.
pub const DEFAULT_HOST: &str = "https://2019-hackathon.mithvault.io";

/// API host every endpoint is resolved against.
pub const DEFAULT_API_BASE: &str = "https://2019-hackathon.api.mithvault.io";

/// Path of the OAuth authorize page on the web host.
pub const AUTHORIZE_PATH: &str = "/#/oauth/authorize";

/// Errors raised while building a [`VaultConfig`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("client_id must not be empty")]
    EmptyClientId,

    #[error("mining_key must not be empty")]
    EmptyMiningKey,

    #[error("client secret rejected: {0}")]
    Key(#[from] KeyError),
}

/// Configuration shared by every request the SDK sends
#[derive(Debug, Clone)]
pub struct VaultConfig {
    pub host: String,
    pub api_base: String,
    pub client_id: String,
    pub client_secret: SecretKey,
    pub mining_key: String,
}

impl VaultConfig {
    /// Build a configuration against the default hosts.
    ///
    /// # Errors
    ///
    /// Fails if `client_id` or `mining_key` is empty, or if
    /// `client_secret_hex` does not decode to a non-empty key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vault_core::VaultConfig;
    ///
    /// let config = VaultConfig::new("my-client", "ab", "my-mining-key").unwrap();
    /// assert_eq!(config.host, vault_core::DEFAULT_HOST);
    /// ```
    pub fn new(
        client_id: impl Into<String>,
        client_secret_hex: &str,
        mining_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }

        let mining_key = mining_key.into();
        if mining_key.is_empty() {
            return Err(ConfigError::EmptyMiningKey);
        }

        let client_secret = SecretKey::from_hex(client_secret_hex)?;

        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            client_id,
            client_secret,
            mining_key,
        })
    }

    /// Override the OAuth web host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the API host.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
