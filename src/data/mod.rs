//! Guild API layer.
//!
//! `GuildApi` is the seam between the mirror phases and Discord. The phases only ever
//! see domain models; `DiscordGuildApi` converts to and from Serenity types, and
//! `PacedGuildApi` wraps any implementation with request pacing and rate-limit retries.

pub mod discord;
pub mod pacing;

#[cfg(test)]
pub mod fake;
#[cfg(test)]
mod test;

use serenity::all::{ChannelId, GuildId, RoleId};
use serenity::async_trait;

use crate::{
    error::api::ApiError,
    model::{
        channel::NewChannel, guild::GuildSnapshot, role::NewRole, user::ActingUser,
    },
};

/// Operations the mirror performs against a guild hosting service.
///
/// Every call is awaited individually; implementations never need to handle
/// concurrent callers.
#[async_trait]
pub trait GuildApi: Send + Sync {
    /// The account the credentials belong to.
    async fn current_user(&self) -> Result<ActingUser, ApiError>;

    /// Snapshot of a guild with its roles, channels, and protected channel ids.
    async fn guild(&self, guild_id: GuildId) -> Result<GuildSnapshot, ApiError>;

    /// Creates a role and returns its id.
    async fn create_role(&self, guild_id: GuildId, role: &NewRole) -> Result<RoleId, ApiError>;

    async fn delete_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<(), ApiError>;

    async fn set_role_position(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        position: u16,
    ) -> Result<(), ApiError>;

    /// Creates a channel or category and returns its id.
    async fn create_channel(
        &self,
        guild_id: GuildId,
        channel: &NewChannel,
    ) -> Result<ChannelId, ApiError>;

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ApiError>;

    async fn set_channel_position(&self, channel_id: ChannelId, position: u16) -> Result<(), ApiError>;

    async fn set_guild_name(&self, guild_id: GuildId, name: &str) -> Result<(), ApiError>;

    /// Sets the guild icon from an image URL.
    async fn set_guild_icon(&self, guild_id: GuildId, icon_url: &str) -> Result<(), ApiError>;
}
