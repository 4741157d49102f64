//! # Vault HTTP
//!
//! HTTP client for the Vault OAuth and mining API.
//!
//! This crate provides:
//! - [`VaultClient`], a reqwest-based client covering the OAuth bind/token
//!   flow, balance and user-info queries, and the mining activity feed
//! - Signature handling: every request whose payload carries the client
//!   identity is signed and the digest attached as `X-Vault-Signature`
//! - Response decoding that maps non-2xx replies to typed errors carrying
//!   the remote status code and body
//!
//! Timestamps and per-request nonces are generated here; the signing core
//! only canonicalizes whatever values it is handed.
//!
//! ## Example
//!
//! ```ignore
//! use vault_core::VaultConfig;
//! use vault_http::VaultClient;
//!
//! let config = VaultConfig::new(client_id, client_secret_hex, mining_key)?;
//! let client = VaultClient::new(config);
//!
//! let balances = client.client_balances().await?;
//! ```

mod client;
mod error;
mod response;

pub use client::VaultClient;
pub use error::VaultHttpError;
pub use response::{decode, decode_optional};
