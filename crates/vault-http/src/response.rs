//! Response decoding helpers for the Vault API

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::VaultHttpError;

/// Decode a required JSON body.
///
/// # Errors
///
/// - [`VaultHttpError::Api`] for non-2xx responses, carrying status and body
/// - [`VaultHttpError::EmptyBody`] if a 2xx response has no content
/// - [`VaultHttpError::Decode`] if the body is not the expected shape
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, VaultHttpError> {
    match decode_optional(response).await? {
        Some(value) => Ok(value),
        None => Err(VaultHttpError::EmptyBody),
    }
}

/// Decode an optional JSON body; an empty 2xx body maps to `None`.
pub async fn decode_optional<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, VaultHttpError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        return Err(VaultHttpError::Api {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    if bytes.is_empty() {
        return Ok(None);
    }

    let value =
        serde_json::from_slice(&bytes).map_err(|e| VaultHttpError::Decode(e.to_string()))?;
    Ok(Some(value))
}
