//! Reqwest-based client for the Vault API

use std::time::Duration;

use chrono::Utc;
use rand::RngCore;
use reqwest::{header, Client, Method};
use uuid::Uuid;
use vault_core::{
    AccessToken, Balance, MiningAction, MiningActivity, MiningActivityPage, UserInfo, VaultConfig,
    AUTHORIZE_PATH,
};
use vault_signing::{signature_for, RequestPayload, SigningPolicy, SIGNATURE_HEADER};

use crate::error::VaultHttpError;
use crate::response::{decode, decode_optional};

/// Client for the Vault OAuth and mining API
///
/// Every request is assembled from the configured `client_id`, a unix
/// timestamp, and a fresh 16-byte nonce, plus the operation's own fields.
/// Payloads travel as query parameters for GET/DELETE and as a JSON body
/// for POST; the signature (when the signing policy applies) is attached
/// unmodified as the `X-Vault-Signature` header.
///
/// # Example
///
/// ```ignore
/// use vault_core::VaultConfig;
/// use vault_http::VaultClient;
///
/// let config = VaultConfig::new(client_id, client_secret_hex, mining_key)?;
/// let client = VaultClient::new(config);
/// let balances = client.client_balances().await?;
/// ```
pub struct VaultClient {
    http: Client,
    config: VaultConfig,
    policy: SigningPolicy,
}

impl VaultClient {
    /// Create a client with default transport settings.
    pub fn new(config: VaultConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap(),
            config,
            policy: SigningPolicy::default(),
        }
    }

    /// Create a client over a pre-configured reqwest client.
    pub fn with_http_client(http: Client, config: VaultConfig) -> Self {
        Self {
            http,
            config,
            policy: SigningPolicy::default(),
        }
    }

    /// Override the signing policy.
    pub fn with_policy(mut self, policy: SigningPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// OAuth authorize URL the user visits to bind their account.
    ///
    /// `state` defaults to a fresh 16-byte hex nonce; pass your own to tie
    /// the grant back to a session.
    pub fn bind_url(&self, state: Option<&str>) -> String {
        let state = match state {
            Some(state) => state.to_string(),
            None => random_nonce(),
        };

        format!(
            "{}{}?client_id={}&state={}",
            self.config.host, AUTHORIZE_PATH, self.config.client_id, state
        )
    }

    /// Exchange a grant code for an access token.
    pub async fn access_token(
        &self,
        grant_code: &str,
        state: &str,
    ) -> Result<AccessToken, VaultHttpError> {
        let payload = self
            .base_payload()?
            .field("grant_code", grant_code)?
            .field("state", state)?;

        let response = self.send(Method::POST, "oauth/token", payload, None).await?;
        decode(response).await
    }

    /// Balances of the OAuth application, one entry per currency.
    pub async fn client_balances(&self) -> Result<Vec<Balance>, VaultHttpError> {
        let payload = self.base_payload()?;

        let response = self
            .send(Method::GET, "oauth/balance", payload, None)
            .await?;
        decode(response).await
    }

    /// Profile of the user the token belongs to.
    pub async fn user_info(&self, token: &str) -> Result<UserInfo, VaultHttpError> {
        let payload = self.base_payload()?;

        let response = self
            .send(Method::GET, "oauth/user-info", payload, Some(token))
            .await?;
        decode(response).await
    }

    /// One page of the user's mining activity feed.
    ///
    /// Pass the previous page's `next_id` to continue; `None` starts from
    /// the newest activity.
    pub async fn mining_activities(
        &self,
        token: &str,
        next_id: Option<&str>,
    ) -> Result<MiningActivityPage, VaultHttpError> {
        let payload = self
            .base_payload()?
            .field("mining_key", &self.config.mining_key)?
            .optional_field("next_id", next_id)?;

        let response = self.send(Method::GET, "mining", payload, Some(token)).await?;
        decode(response).await
    }

    /// Report a mining action. Returns the recorded activity when the
    /// service echoes one back.
    pub async fn record_mining_activity(
        &self,
        token: &str,
        action: &MiningAction,
    ) -> Result<Option<MiningActivity>, VaultHttpError> {
        let payload = self
            .base_payload()?
            .field("mining_key", &self.config.mining_key)?
            .field("uuid", action.uuid)?
            .field("reward", action.reward)?
            .field(
                "happened_at",
                action.happened_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            )?;

        let response = self
            .send(Method::POST, "mining", payload, Some(token))
            .await?;
        decode_optional(response).await
    }

    /// Delete a previously reported mining activity.
    pub async fn delete_mining_activity(
        &self,
        token: &str,
        uuid: Uuid,
    ) -> Result<(), VaultHttpError> {
        let payload = self
            .base_payload()?
            .field("mining_key", &self.config.mining_key)?
            .field("uuid", uuid)?;

        let response = self
            .send(Method::DELETE, "mining", payload, Some(token))
            .await?;
        let _: Option<serde_json::Value> = decode_optional(response).await?;
        Ok(())
    }

    /// Fields common to every API request.
    fn base_payload(&self) -> Result<RequestPayload, VaultHttpError> {
        Ok(RequestPayload::new()
            .field("client_id", &self.config.client_id)?
            .field("timestamp", Utc::now().timestamp())?
            .field("nonce", random_nonce())?)
    }

    /// Sign and dispatch one request. GET/DELETE payloads travel as query
    /// parameters, POST payloads as a JSON body.
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        payload: RequestPayload,
        token: Option<&str>,
    ) -> Result<reqwest::Response, VaultHttpError> {
        let url = format!("{}/{}", self.config.api_base, endpoint);
        let signature = signature_for(&payload, &self.config.client_secret, self.policy)?;

        tracing::debug!(
            endpoint,
            method = %method,
            signed = signature.is_some(),
            "dispatching Vault API request"
        );

        let mut request = self.http.request(method.clone(), &url);
        request = if method == Method::POST {
            request.json(&payload)
        } else {
            request.query(&payload)
        };

        if let Some(signature) = signature {
            request = request.header(SIGNATURE_HEADER, signature);
        }
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token);
        }

        Ok(request.send().await?)
    }
}

/// 16 random bytes, hex encoded. Used for nonces and default OAuth state.
fn random_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
