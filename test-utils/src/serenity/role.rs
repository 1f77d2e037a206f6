//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role` structs
//! for testing purposes. These factories create valid Role objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Optional role attributes beyond id, name, color, and position.
///
/// Defaults to a plain role: not hoisted, not managed, not mentionable, with zero
/// permissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestRole {
    pub permissions: u64,
    pub hoist: bool,
    pub mentionable: bool,
    pub managed: bool,
}

/// Builds the JSON representation of a role as returned by Discord's API.
///
/// Used directly when embedding roles in a guild payload (see
/// `guild::create_test_guild`) because Serenity assigns the guild id to roles
/// while deserializing the guild.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
/// - `attrs` - Remaining role flags and permission bits
pub fn test_role_json(
    role_id: u64,
    name: &str,
    color: u32,
    position: u16,
    attrs: TestRole,
) -> serde_json::Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": attrs.hoist,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": attrs.permissions.to_string(),
        "managed": attrs.managed,
        "mentionable": attrs.mentionable,
    })
}

/// Creates a test Serenity Role with customizable fields.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::{create_test_role, TestRole};
///
/// let role = create_test_role(123456789, "Admin", 0xFF0000, 10, TestRole::default());
/// assert_eq!(role.name, "Admin");
/// assert_eq!(role.colour.0, 0xFF0000);
/// assert_eq!(role.position, 10);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: u16, attrs: TestRole) -> Role {
    serde_json::from_value(test_role_json(role_id, name, color, position, attrs))
        .expect("Failed to create test role - invalid JSON structure")
}
