//! Guild channel domain models.
//!
//! Channels are represented as a closed set of kinds. Categories and leaf channels share
//! one snapshot type; the kind-specific settings live on the `ChannelKind` variant so the
//! replicators dispatch with an exhaustive match rather than inspecting Serenity's
//! open-ended `ChannelType`.

use serenity::all::{ChannelId, ChannelType, GuildChannel};

use crate::model::overwrite::Overwrite;

/// Highest voice bitrate the mirror will request, in bits per second.
///
/// Guilds without boosts reject anything above this, so source bitrates are clamped.
pub const MAX_VOICE_BITRATE: u32 = 96_000;

/// Bitrate Discord assigns to voice channels that do not report one.
const DEFAULT_VOICE_BITRATE: u32 = 64_000;

/// Settings specific to text channels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSettings {
    pub topic: Option<String>,
    /// Slow mode interval in seconds (0 = disabled).
    pub slow_mode: u16,
    /// Age-restricted flag.
    pub nsfw: bool,
}

/// Settings specific to voice channels.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    /// Bitrate in bits per second.
    pub bitrate: u32,
    /// Maximum connected users (0 = unlimited).
    pub user_limit: u32,
    /// Voice region hint; `None` lets Discord choose automatically.
    pub rtc_region: Option<String>,
}

impl VoiceSettings {
    /// Copy of the settings with the bitrate clamped to `MAX_VOICE_BITRATE`.
    pub fn clamped(&self) -> Self {
        Self {
            bitrate: self.bitrate.min(MAX_VOICE_BITRATE),
            user_limit: self.user_limit,
            rtc_region: self.rtc_region.clone(),
        }
    }
}

/// Closed set of channel kinds the mirror distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelKind {
    Category,
    Text(TextSettings),
    Voice(VoiceSettings),
    /// Any other Discord channel type (news, stage, forum, ...), kept as the raw type number.
    Other(u8),
}

/// Channel as it exists in a guild at the start of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSnapshot {
    pub id: ChannelId,
    pub name: String,
    /// Position among sibling channels.
    pub position: u16,
    /// Category this channel belongs to, if any.
    pub parent_id: Option<ChannelId>,
    pub overwrites: Vec<Overwrite>,
    pub kind: ChannelKind,
}

impl ChannelSnapshot {
    /// Converts a Serenity guild channel to a snapshot at the data layer boundary.
    ///
    /// Overwrites whose target kind Serenity does not recognize are dropped.
    pub fn from_serenity(channel: &GuildChannel) -> Self {
        let kind = match channel.kind {
            ChannelType::Category => ChannelKind::Category,
            ChannelType::Text => ChannelKind::Text(TextSettings {
                topic: channel.topic.clone().filter(|topic| !topic.is_empty()),
                slow_mode: channel.rate_limit_per_user.unwrap_or(0),
                nsfw: channel.nsfw,
            }),
            ChannelType::Voice => ChannelKind::Voice(VoiceSettings {
                bitrate: channel.bitrate.unwrap_or(DEFAULT_VOICE_BITRATE),
                user_limit: channel.user_limit.unwrap_or(0),
                rtc_region: channel.rtc_region.clone(),
            }),
            other => ChannelKind::Other(u8::from(other)),
        };

        Self {
            id: channel.id,
            name: channel.name.clone(),
            position: channel.position,
            parent_id: channel.parent_id,
            overwrites: channel
                .permission_overwrites
                .iter()
                .filter_map(Overwrite::from_serenity)
                .collect(),
            kind,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self.kind, ChannelKind::Category)
    }
}

/// Kind of channel to create, with its settings.
#[derive(Debug, Clone, PartialEq)]
pub enum NewChannelKind {
    Category,
    Text(TextSettings),
    Voice(VoiceSettings),
}

/// Attributes of a channel or category to create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChannel {
    pub name: String,
    pub kind: NewChannelKind,
    /// Target category to nest the channel under.
    pub parent_id: Option<ChannelId>,
    /// Position requested at creation time; the position synchronizer sets it again afterwards.
    pub position: Option<u16>,
    pub overwrites: Vec<Overwrite>,
}
