//! Typed views over per-node-type config payloads.
//!
//! The editor stores node configuration as a free-form subdocument whose
//! shape depends on the node's type tag. This module gives each known tag
//! its one payload shape; tags outside the catalog (and payloads that do
//! not match their shape) fall back to [`NodeConfig::Opaque`] so a growing
//! catalog never breaks reads.

use bson::Document;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::catalog::node_types;

// ---------------------------------------------------------------------------
// Per-type payload shapes
// ---------------------------------------------------------------------------

/// `trigger-cron`: schedule expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerCronConfig {
    pub cron_expression: Option<String>,
}

/// `discord-webhook`: destination and message template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscordWebhookConfig {
    pub webhook_url: Option<String>,
    pub message: Option<String>,
}

/// `delay`: wait duration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelayConfig {
    pub delay: Option<f64>,
    pub unit: Option<String>,
}

/// `hyperliquid-spot-long` / `hyperliquid-spot-short`: spot order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpotOrderConfig {
    pub asset: Option<String>,
    pub amount: Option<f64>,
    pub order_type: Option<String>,
}

/// `hyperliquid-perp-long` / `hyperliquid-perp-short`: perp order with
/// leverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerpOrderConfig {
    pub asset: Option<String>,
    pub amount: Option<f64>,
    pub leverage: Option<f64>,
    pub order_type: Option<String>,
}

/// `get-token-price`: which token to quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenPriceConfig {
    pub token: Option<String>,
}

/// `conditional-if`: branch condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionalConfig {
    pub condition: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// Per-type node configuration, keyed by the node's catalog tag.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeConfig {
    TriggerClick,
    TriggerCron(TriggerCronConfig),
    DiscordWebhook(DiscordWebhookConfig),
    Delay(DelayConfig),
    SpotLong(SpotOrderConfig),
    SpotShort(SpotOrderConfig),
    PerpLong(PerpOrderConfig),
    PerpShort(PerpOrderConfig),
    GetTokenPrice(TokenPriceConfig),
    ConditionalIf(ConditionalConfig),
    /// Unknown tag, or a payload that does not match its tag's shape.
    Opaque(Option<Document>),
}

impl NodeConfig {
    /// Build the typed view for a node's tag and raw payload.
    ///
    /// An absent payload parses as the tag's empty config (the editor
    /// leaves config out until the node is configured).
    pub fn from_parts(node_type: &str, config: Option<&Document>) -> NodeConfig {
        use node_types::*;
        match node_type {
            TRIGGER_CLICK => NodeConfig::TriggerClick,
            TRIGGER_CRON => parse(config, NodeConfig::TriggerCron),
            DISCORD_WEBHOOK => parse(config, NodeConfig::DiscordWebhook),
            DELAY => parse(config, NodeConfig::Delay),
            HYPERLIQUID_SPOT_LONG => parse(config, NodeConfig::SpotLong),
            HYPERLIQUID_SPOT_SHORT => parse(config, NodeConfig::SpotShort),
            HYPERLIQUID_PERP_LONG => parse(config, NodeConfig::PerpLong),
            HYPERLIQUID_PERP_SHORT => parse(config, NodeConfig::PerpShort),
            GET_TOKEN_PRICE => parse(config, NodeConfig::GetTokenPrice),
            CONDITIONAL_IF => parse(config, NodeConfig::ConditionalIf),
            _ => NodeConfig::Opaque(config.cloned()),
        }
    }

    /// One-line description of the configured values, mirroring what the
    /// editor's node cards display. `None` when there is nothing to show.
    pub fn summary(&self) -> Option<String> {
        match self {
            NodeConfig::TriggerClick => None,
            NodeConfig::TriggerCron(c) => c.cron_expression.clone(),
            NodeConfig::DiscordWebhook(c) => c.message.clone(),
            NodeConfig::Delay(c) => match (c.delay, c.unit.as_deref()) {
                (Some(delay), Some(unit)) => Some(format!("{delay} {unit}")),
                (Some(delay), None) => Some(format!("{delay} seconds")),
                _ => None,
            },
            NodeConfig::SpotLong(c) | NodeConfig::SpotShort(c) => order_summary(
                c.asset.as_deref(),
                c.amount,
                None,
            ),
            NodeConfig::PerpLong(c) | NodeConfig::PerpShort(c) => order_summary(
                c.asset.as_deref(),
                c.amount,
                c.leverage,
            ),
            NodeConfig::GetTokenPrice(c) => {
                c.token.as_ref().map(|token| format!("Token: {token}"))
            }
            NodeConfig::ConditionalIf(c) => c.condition.clone(),
            NodeConfig::Opaque(_) => None,
        }
    }
}

fn parse<T, F>(config: Option<&Document>, wrap: F) -> NodeConfig
where
    T: DeserializeOwned,
    F: FnOnce(T) -> NodeConfig,
{
    let doc = config.cloned().unwrap_or_default();
    match bson::from_document(doc) {
        Ok(parsed) => wrap(parsed),
        Err(_) => NodeConfig::Opaque(config.cloned()),
    }
}

fn order_summary(
    asset: Option<&str>,
    amount: Option<f64>,
    leverage: Option<f64>,
) -> Option<String> {
    let asset = asset?;
    let mut summary = match amount {
        Some(amount) => format!("{amount} {asset}"),
        None => asset.to_string(),
    };
    if let Some(leverage) = leverage {
        summary.push_str(&format!(" @ {leverage}x"));
    }
    Some(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
