//! Test factory for creating Serenity GuildChannel and PermissionOverwrite objects.

use serenity::all::{
    GuildChannel, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

/// Creates a permission overwrite targeting either a role or a member.
///
/// # Arguments
/// - `target_id` - Role or user ID the overwrite applies to
/// - `is_member` - `true` for a member overwrite, `false` for a role overwrite
/// - `allow` - Allowed permission bits
/// - `deny` - Denied permission bits
pub fn create_test_overwrite(target_id: u64, is_member: bool, allow: u64, deny: u64) -> PermissionOverwrite {
    let kind = if is_member {
        PermissionOverwriteType::Member(UserId::new(target_id))
    } else {
        PermissionOverwriteType::Role(RoleId::new(target_id))
    };

    PermissionOverwrite {
        allow: Permissions::from_bits_truncate(allow),
        deny: Permissions::from_bits_truncate(deny),
        kind,
    }
}

/// Creates a test Serenity GuildChannel of any kind.
///
/// Text-specific fields are set to their Discord defaults (no topic, no slow mode,
/// not age restricted).
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID owning the channel
/// - `name` - Channel name
/// - `kind` - Raw Discord channel type (0 text, 2 voice, 4 category, ...)
/// - `position` - Channel position among its siblings
/// - `parent_id` - Optional category ID
/// - `overwrites` - Permission overwrites attached to the channel
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    position: u16,
    parent_id: Option<u64>,
    overwrites: &[PermissionOverwrite],
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "parent_id": parent_id.map(|id| id.to_string()),
        "permission_overwrites": overwrites_json(overwrites),
        "topic": null,
        "nsfw": false,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}

/// Creates a test Serenity voice GuildChannel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID owning the channel
/// - `name` - Channel name
/// - `position` - Channel position among its siblings
/// - `bitrate` - Voice bitrate in bits per second
/// - `user_limit` - Maximum connected users (0 = unlimited)
/// - `rtc_region` - Optional voice region hint
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
    bitrate: u32,
    user_limit: u32,
    rtc_region: Option<&str>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 2,
        "name": name,
        "position": position,
        "parent_id": null,
        "permission_overwrites": [],
        "nsfw": false,
        "bitrate": bitrate,
        "user_limit": user_limit,
        "rtc_region": rtc_region,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test voice channel - invalid JSON structure")
}

fn overwrites_json(overwrites: &[PermissionOverwrite]) -> serde_json::Value {
    serde_json::to_value(overwrites).expect("Failed to serialize test permission overwrites")
}
