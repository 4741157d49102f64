//! # Vault Signing
//!
//! Deterministic payload canonicalization and request signing for the Vault
//! API.
//!
//! This crate provides:
//! - A canonicalizer that flattens a payload tree into one reproducible string
//! - An HMAC-SHA512 signer producing the `X-Vault-Signature` header value
//! - A request-building helper with an explicit signing policy
//!
//! ## Canonical form rules
//!
//! 1. Mapping keys sorted byte-wise (ordinal, not locale-aware)
//! 2. Mapping entries rendered as `key=value`, joined with `&`, no
//!    surrounding delimiters
//! 3. Sequences preserve order, elements joined with `,`, wrapped in `[` `]`
//! 4. Strings render raw, without quoting or escaping
//! 5. Booleans render as `true` / `false`, null as `null`
//! 6. Integers render base-10; floats use Rust's shortest round-trip
//!    `Display` form (never scientific notation)
//!
//! The same payload always canonicalizes to the same string regardless of
//! the order its mapping entries were inserted in, so signatures are stable
//! across construction order.
//!
//! ## Example
//!
//! ```rust
//! use vault_core::SecretKey;
//! use vault_signing::{canonicalize, sign};
//!
//! let payload = serde_json::json!({
//!     "timestamp": 1000,
//!     "client_id": "abc",
//!     "nonce": "0011",
//!     "tags": ["x", "y"],
//! });
//!
//! let canonical = canonicalize(&payload).unwrap();
//! assert_eq!(canonical, "client_id=abc&nonce=0011&tags=[x,y]&timestamp=1000");
//!
//! let key = SecretKey::from_hex("ab").unwrap();
//! let signature = sign(&payload, &key).unwrap();
//! assert_eq!(signature.len(), 128);
//! ```

mod canonical;
mod error;
mod request;
mod sign;

pub use canonical::*;
pub use error::*;
pub use request::*;
pub use sign::*;
