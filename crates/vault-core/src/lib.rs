//! # Vault Core
//!
//! Core types for the Mith Vault SDK.
//!
//! This crate provides:
//! - Domain types for the Vault OAuth and mining APIs
//! - The opaque [`SecretKey`] used to key request signatures
//! - Process-wide configuration, validated once at load time
//!
//! ## Example
//!
//! ```rust
//! use vault_core::VaultConfig;
//!
//! let config = VaultConfig::new("my-client", "ab01cd", "my-mining-key").unwrap();
//! assert_eq!(config.client_secret.as_bytes(), &[0xab, 0x01, 0xcd]);
//! ```

pub mod config;
pub mod error;
pub mod secret;
pub mod types;

// Re-exports for convenience
pub use config::*;
pub use error::*;
pub use secret::*;
pub use types::*;
