//! User documents from the `users` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DocId, Timestamp};

/// A user document.
///
/// Identity fields come from the external auth provider. Nothing here is
/// validated or enforced unique by this service; the store is
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: DocId,
    pub privy_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperliquid_account: Option<HyperliquidAccount>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Hyperliquid account marker embedded in a user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperliquidAccount {
    pub exists: bool,
}

/// API-facing user shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub privy_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub has_hyperliquid_account: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            privy_id: user.privy_id,
            username: user.username,
            email: user.email,
            wallet_address: user.wallet_address,
            has_hyperliquid_account: user
                .hyperliquid_account
                .map(|a| a.exists)
                .unwrap_or(false),
            created_at: user.created_at.to_chrono(),
            updated_at: user.updated_at.map(|t| t.to_chrono()),
        }
    }
}
