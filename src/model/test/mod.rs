use chrono::Utc;
use serenity::all::{ChannelId, GuildId, Permissions, RoleId, UserId};
use test_utils::serenity::{
    create_test_channel, create_test_guild, create_test_overwrite, create_test_role,
    create_test_voice_channel, test_role_json, ProtectedChannelIds, TestRole,
};

use crate::error::api::ApiError;
use crate::model::{
    channel::{ChannelKind, ChannelSnapshot, TextSettings, VoiceSettings},
    guild::GuildSnapshot,
    identity_map::IdentityMapBuilder,
    overwrite::{Overwrite, OverwriteTarget},
    report::{Action, EntityKind, MirrorReport, Outcome, Phase, PhaseReport, Totals},
    role::RoleSnapshot,
};


const GUILD_ID: u64 = 1000;
