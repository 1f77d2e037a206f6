use dioxus_logger::tracing;
use serenity::all::{ChannelId, GuildId, RoleId};

use crate::{data::GuildApi, model::report::Outcome};

/// Forces created roles and channels to the position of their source entity.
///
/// Discord assigns its own positions at creation time, so each replicator calls this
/// right after creating an entity. Failures are logged and returned as outcomes; the
/// entity is kept at whatever position Discord gave it.
pub struct PositionSynchronizer<'a> {
    api: &'a dyn GuildApi,
}

impl<'a> PositionSynchronizer<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self { api }
    }

    pub async fn sync_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        name: &str,
        position: u16,
    ) -> Outcome {
        match self.api.set_role_position(guild_id, role_id, position).await {
            Ok(()) => Outcome::Done,
            Err(e) => {
                tracing::warn!("Could not set position for role {}: {}", name, e);
                Outcome::Failed(e)
            }
        }
    }

    /// Applies to categories as well as leaf channels.
    pub async fn sync_channel(&self, channel_id: ChannelId, name: &str, position: u16) -> Outcome {
        match self.api.set_channel_position(channel_id, position).await {
            Ok(()) => Outcome::Done,
            Err(e) => {
                tracing::warn!("Could not set position for channel {}: {}", name, e);
                Outcome::Failed(e)
            }
        }
    }
}
