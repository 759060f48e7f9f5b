//! Node-type catalog for the workflow editor's fixed node set.
//!
//! This module lives in `core` (zero internal deps) so both the graph
//! projection and any future tooling resolve labels and preview styling
//! from one place.
//!
//! The catalog is display metadata only: unknown tags fall back to neutral
//! defaults and are never rejected, because the upstream editor may ship
//! new node kinds before this dashboard learns about them.

// ---------------------------------------------------------------------------
// Node type constants
// ---------------------------------------------------------------------------

/// Type tags written by the workflow editor.
pub mod node_types {
    pub const TRIGGER_CLICK: &str = "trigger-click";
    pub const TRIGGER_CRON: &str = "trigger-cron";
    pub const DISCORD_WEBHOOK: &str = "discord-webhook";
    pub const DELAY: &str = "delay";
    pub const HYPERLIQUID_SPOT_LONG: &str = "hyperliquid-spot-long";
    pub const HYPERLIQUID_SPOT_SHORT: &str = "hyperliquid-spot-short";
    pub const HYPERLIQUID_PERP_LONG: &str = "hyperliquid-perp-long";
    pub const HYPERLIQUID_PERP_SHORT: &str = "hyperliquid-perp-short";
    pub const GET_TOKEN_PRICE: &str = "get-token-price";
    pub const CONDITIONAL_IF: &str = "conditional-if";

    /// All recognised node types.
    pub const ALL: &[&str] = &[
        TRIGGER_CLICK,
        TRIGGER_CRON,
        DISCORD_WEBHOOK,
        DELAY,
        HYPERLIQUID_SPOT_LONG,
        HYPERLIQUID_SPOT_SHORT,
        HYPERLIQUID_PERP_LONG,
        HYPERLIQUID_PERP_SHORT,
        GET_TOKEN_PRICE,
        CONDITIONAL_IF,
    ];
}

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// Fallback icon for tags outside the catalog.
pub const DEFAULT_ICON: &str = "⚪";

/// Fallback color for tags outside the catalog.
pub const DEFAULT_COLOR: &str = "#64748b";

/// Check whether a node type string is recognised.
pub fn is_known(node_type: &str) -> bool {
    node_types::ALL.contains(&node_type)
}

/// Default display label for a type tag, `None` for unknown tags.
pub fn default_label(node_type: &str) -> Option<&'static str> {
    use node_types::*;
    let label = match node_type {
        TRIGGER_CLICK => "Click Trigger",
        TRIGGER_CRON => "Cron Trigger",
        DISCORD_WEBHOOK => "Discord Webhook",
        DELAY => "Delay",
        HYPERLIQUID_SPOT_LONG => "Hyperliquid Spot Long",
        HYPERLIQUID_SPOT_SHORT => "Hyperliquid Spot Short",
        HYPERLIQUID_PERP_LONG => "Hyperliquid Perp Long",
        HYPERLIQUID_PERP_SHORT => "Hyperliquid Perp Short",
        GET_TOKEN_PRICE => "Get Token Price",
        CONDITIONAL_IF => "Conditional If",
        _ => return None,
    };
    Some(label)
}

/// Compact-preview icon for a type tag.
pub fn icon(node_type: &str) -> &'static str {
    use node_types::*;
    match node_type {
        TRIGGER_CLICK => "▶️",
        TRIGGER_CRON => "⏰",
        DISCORD_WEBHOOK => "💬",
        DELAY => "⏱️",
        HYPERLIQUID_SPOT_LONG => "📈",
        HYPERLIQUID_SPOT_SHORT => "📉",
        HYPERLIQUID_PERP_LONG => "⚡📈",
        HYPERLIQUID_PERP_SHORT => "⚡📉",
        GET_TOKEN_PRICE => "💰",
        CONDITIONAL_IF => "🔀",
        _ => DEFAULT_ICON,
    }
}

/// Compact-preview background color for a type tag.
pub fn color(node_type: &str) -> &'static str {
    use node_types::*;
    match node_type {
        TRIGGER_CLICK => "#3b82f6",
        TRIGGER_CRON => "#8b5cf6",
        DISCORD_WEBHOOK => "#6366f1",
        DELAY => "#f97316",
        HYPERLIQUID_SPOT_LONG => "#10b981",
        HYPERLIQUID_SPOT_SHORT => "#ef4444",
        HYPERLIQUID_PERP_LONG => "#059669",
        HYPERLIQUID_PERP_SHORT => "#dc2626",
        GET_TOKEN_PRICE => "#eab308",
        CONDITIONAL_IF => "#6366f1",
        _ => DEFAULT_COLOR,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
