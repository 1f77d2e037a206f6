//! Guild domain models.

use serenity::all::{ChannelId, GuildChannel, GuildId, ImageHash, PartialGuild, RoleId};

use crate::model::{channel::ChannelSnapshot, role::RoleSnapshot, user::ActingUser};

/// Channels a guild designates for rules, public updates, and system messages.
///
/// Discord refuses to delete these while they are assigned, so a reset leaves them in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProtectedChannels {
    pub rules: Option<ChannelId>,
    pub public_updates: Option<ChannelId>,
    pub system: Option<ChannelId>,
}

impl ProtectedChannels {
    pub fn contains(&self, channel_id: ChannelId) -> bool {
        [self.rules, self.public_updates, self.system].contains(&Some(channel_id))
    }
}

/// Guild state read at the start of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSnapshot {
    pub id: GuildId,
    pub name: String,
    /// Resolvable URL of the guild icon, if the guild has one.
    pub icon_url: Option<String>,
    pub roles: Vec<RoleSnapshot>,
    pub channels: Vec<ChannelSnapshot>,
    pub protected: ProtectedChannels,
}

impl GuildSnapshot {
    /// Builds a snapshot from a REST guild lookup and the guild's channel list.
    ///
    /// Roles are ordered by id so snapshots of the same guild compare equal.
    pub fn from_serenity(guild: &PartialGuild, channels: &[GuildChannel]) -> Self {
        let mut roles: Vec<RoleSnapshot> = guild.roles.values().map(RoleSnapshot::from_serenity).collect();
        roles.sort_by_key(|role| role.id);

        Self {
            id: guild.id,
            name: guild.name.clone(),
            icon_url: guild.icon.as_ref().map(|hash| icon_url(guild.id, hash)),
            roles,
            channels: channels.iter().map(ChannelSnapshot::from_serenity).collect(),
            protected: ProtectedChannels {
                rules: guild.rules_channel_id,
                public_updates: guild.public_updates_channel_id,
                system: guild.system_channel_id,
            },
        }
    }

    /// The implicit role every member has. Its id is the guild id.
    pub fn everyone_role_id(&self) -> RoleId {
        RoleId::new(self.id.get())
    }

    pub fn is_everyone(&self, role_id: RoleId) -> bool {
        role_id == self.everyone_role_id()
    }
}

/// CDN URL of a guild icon in a format Discord accepts back as image data.
fn icon_url(guild_id: GuildId, hash: &ImageHash) -> String {
    let ext = if hash.is_animated() { "gif" } else { "png" };
    format!("https://cdn.discordapp.com/icons/{}/{}.{}?size=1024", guild_id, hash, ext)
}

/// Everything a mirror phase needs to know about the run it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct MirrorScope<'a> {
    pub source: &'a GuildSnapshot,
    pub target: &'a GuildSnapshot,
    pub acting_user: &'a ActingUser,
}
