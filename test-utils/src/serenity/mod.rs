//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (PartialGuild, Role, GuildChannel, PermissionOverwrite) for testing purposes.
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity PartialGuild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `channel::create_test_overwrite` - Create Serenity PermissionOverwrite objects

pub mod channel;
pub mod guild;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::{create_test_channel, create_test_overwrite, create_test_voice_channel};
pub use guild::{create_test_guild, ProtectedChannelIds};
pub use role::{create_test_role, test_role_json, TestRole};
