//! Vault API domain types
//!
//! This module contains the request and response shapes of the Vault OAuth
//! and mining endpoints.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token issued by the `oauth/token` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessToken {
    pub access_token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// One balance entry of the OAuth application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub currency: String,
    pub balance: String,
    pub updated_at: DateTime<Utc>,
}

/// Profile of the user who authorized the application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub uuid: Uuid,

    /// Fields the endpoint returns beyond the stable contract.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Lifecycle state of a reported mining activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MiningStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// A mining activity as returned by the activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MiningActivity {
    pub uuid: Uuid,
    pub reward: i64,
    pub happened_at: NaiveDateTime,
    pub status: MiningStatus,
}

/// One page of the mining activity feed
///
/// `next_id` carries the cursor for the following page; `None` means the
/// feed is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MiningActivityPage {
    pub activities: Vec<MiningActivity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_id: Option<String>,
}

/// A mining action to report through the write endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MiningAction {
    pub uuid: Uuid,
    pub reward: i64,
    pub happened_at: NaiveDateTime,
}

impl MiningAction {
    /// Action with a fresh uuid, the default reward of 1, and the current time.
    pub fn new() -> Self {
        Self::with_reward(1)
    }

    /// Action with a fresh uuid and the given reward.
    pub fn with_reward(reward: i64) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            reward,
            happened_at: Utc::now().naive_utc(),
        }
    }
}

impl Default for MiningAction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_roundtrip() {
        let balance = Balance {
            currency: "MITH".to_string(),
            balance: "128.5".to_string(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&balance).unwrap();
        let parsed: Balance = serde_json::from_str(&json).unwrap();
        assert_eq!(balance, parsed);
    }

    #[test]
    fn test_mining_activity_roundtrip() {
        let activity = MiningActivity {
            uuid: Uuid::new_v4(),
            reward: 3,
            happened_at: Utc::now().naive_utc(),
            status: MiningStatus::Confirmed,
        };

        let json = serde_json::to_string(&activity).unwrap();
        let parsed: MiningActivity = serde_json::from_str(&json).unwrap();
        assert_eq!(activity, parsed);
    }

    #[test]
    fn test_mining_status_serialization() {
        assert_eq!(
            serde_json::to_string(&MiningStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&MiningStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(
            serde_json::to_string(&MiningStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn test_page_without_cursor_omits_next_id() {
        let page = MiningActivityPage {
            activities: vec![],
            next_id: None,
        };

        let json = serde_json::to_string(&page).unwrap();
        assert!(!json.contains("next_id"));
    }

    #[test]
    fn test_user_info_keeps_unknown_fields() {
        let json = r#"{"uuid":"9f4e7a1c-2b9d-4f7e-8a53-0d2cbb6f1e90","email":"m@example.com"}"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.extra.get("email").and_then(|v| v.as_str()), Some("m@example.com"));
    }

    #[test]
    fn test_default_action_reward() {
        let action = MiningAction::new();
        assert_eq!(action.reward, 1);
    }
}
