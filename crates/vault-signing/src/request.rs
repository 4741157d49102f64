//! Request payload assembly and the signing gate
//!
//! The Vault API signs a request only when its parameter set carries the
//! client identity. That rule is a business policy, not a property of the
//! cryptographic core, so it lives here as an explicit [`SigningPolicy`]
//! value instead of an implicit conditional on payload shape.

use serde::Serialize;
use serde_json::{Map, Value};
use vault_core::SecretKey;

use crate::error::SigningError;
use crate::sign::sign;

/// Payload field whose presence identifies the calling client.
pub const IDENTITY_FIELD: &str = "client_id";

/// Policy controlling whether an outgoing request payload is signed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningPolicy {
    /// Sign only when the payload carries [`IDENTITY_FIELD`].
    #[default]
    WhenIdentified,
    /// Sign every payload.
    Always,
    /// Never sign.
    Never,
}

/// A request payload under construction
///
/// Wraps the field mapping sent to the API. Values are converted into
/// payload trees as they are inserted, so an unrepresentable value fails at
/// the call site rather than at signing time.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct RequestPayload {
    fields: Map<String, Value>,
}

impl RequestPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one field.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::InvalidPayloadType`] if the value cannot be
    /// represented as a payload tree.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Self, SigningError> {
        self.fields.insert(name.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Insert a field only when a value is present. Used for optional
    /// parameters such as pagination cursors.
    pub fn optional_field(
        self,
        name: impl Into<String>,
        value: Option<impl Serialize>,
    ) -> Result<Self, SigningError> {
        match value {
            Some(value) => self.field(name, value),
            None => Ok(self),
        }
    }

    /// Whether the payload carries the client identity.
    pub fn is_identified(&self) -> bool {
        self.fields.contains_key(IDENTITY_FIELD)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying field mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the payload into a `serde_json::Value` mapping.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Compute the signature for an outgoing request, subject to `policy`.
///
/// `Ok(None)` means the request goes out unsigned; in that case the signer
/// is never invoked.
///
/// # Example
///
/// ```rust
/// use vault_core::SecretKey;
/// use vault_signing::{signature_for, RequestPayload, SigningPolicy};
///
/// let key = SecretKey::from_hex("ab").unwrap();
///
/// let anonymous = RequestPayload::new().field("state", "xyz").unwrap();
/// let signed = signature_for(&anonymous, &key, SigningPolicy::WhenIdentified).unwrap();
/// assert!(signed.is_none());
/// ```
pub fn signature_for(
    payload: &RequestPayload,
    key: &SecretKey,
    policy: SigningPolicy,
) -> Result<Option<String>, SigningError> {
    let should_sign = match policy {
        SigningPolicy::Always => true,
        SigningPolicy::Never => false,
        SigningPolicy::WhenIdentified => payload.is_identified(),
    };

    if !should_sign {
        return Ok(None);
    }

    sign(payload, key).map(Some)
}
