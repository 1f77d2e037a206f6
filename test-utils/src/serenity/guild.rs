//! Test factory for creating Serenity PartialGuild objects.
//!
//! This module provides factory functions for creating mock Serenity `PartialGuild`
//! structs for testing purposes. `PartialGuild` is what Discord's REST API returns
//! from a guild lookup, which is the only form of guild the mirror reads.

use serenity::all::PartialGuild;

/// Channel ids the guild marks as its rules, public updates, and system channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectedChannelIds {
    pub rules: Option<u64>,
    pub public_updates: Option<u64>,
    pub system: Option<u64>,
}

/// Creates a test Serenity PartialGuild with customizable fields.
///
/// The icon hash is automatically padded to 32 characters (Discord's icon hash format)
/// if it's shorter. All other fields are set to reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (will be padded to 32 characters if shorter)
/// - `roles` - Role payloads built with `role::test_role_json`
/// - `protected` - Rules, public updates, and system channel ids
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialGuild (indicates invalid test data)
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    roles: Vec<serde_json::Value>,
    protected: ProtectedChannelIds,
) -> PartialGuild {
    // Animated icons are 34 characters ("a_" prefix + 32 hex chars)
    let formatted_icon = icon_hash.map(|hash| {
        if hash.starts_with("a_") {
            if hash.len() < 34 {
                format!("{:0<34}", hash)
            } else {
                hash.to_string()
            }
        } else if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_id": protected.system.map(|id| id.to_string()),
        "system_channel_flags": 0,
        "rules_channel_id": protected.rules.map(|id| id.to_string()),
        "public_updates_channel_id": protected.public_updates.map(|id| id.to_string()),
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "max_presences": 25000,
        "max_members": 100000,
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
