use crate::{
    data::fake::{acting_user, empty_guild, Call, FakeGuildApi},
    model::{
        channel::{ChannelKind, ChannelSnapshot, TextSettings, VoiceSettings},
        guild::{GuildSnapshot, MirrorScope},
        identity_map::IdentityMapBuilder,
        overwrite::{Overwrite, OverwriteTarget},
        report::{Action, Outcome, Phase},
        role::RoleSnapshot,
        user::ActingUser,
    },
};
use serenity::all::{ChannelId, GuildId, Permissions, RoleId, UserId};

mod category;

const SOURCE_ID: u64 = 1000;
const TARGET_ID: u64 = 2000;

fn scope<'a>(
    source: &'a GuildSnapshot,
    target: &'a GuildSnapshot,
    user: &'a ActingUser,
) -> MirrorScope<'a> {
    MirrorScope {
        source,
        target,
        acting_user: user,
    }
}

fn role(id: u64, name: &str, position: u16) -> RoleSnapshot {
    RoleSnapshot {
        id: RoleId::new(id),
        name: name.to_string(),
        colour: 0x3498db,
        hoist: position % 2 == 0,
        mentionable: true,
        permissions: Permissions::SEND_MESSAGES | Permissions::VIEW_CHANNEL,
        position,
    }
}

fn category(id: u64, name: &str, position: u16, overwrites: Vec<Overwrite>) -> ChannelSnapshot {
    ChannelSnapshot {
        id: ChannelId::new(id),
        name: name.to_string(),
        position,
        parent_id: None,
        overwrites,
        kind: ChannelKind::Category,
    }
}

fn text_channel(
    id: u64,
    name: &str,
    position: u16,
    parent: Option<u64>,
    overwrites: Vec<Overwrite>,
) -> ChannelSnapshot {
    ChannelSnapshot {
        id: ChannelId::new(id),
        name: name.to_string(),
        position,
        parent_id: parent.map(ChannelId::new),
        overwrites,
        kind: ChannelKind::Text(TextSettings::default()),
    }
}

fn voice_channel(id: u64, name: &str, position: u16, bitrate: u32) -> ChannelSnapshot {
    ChannelSnapshot {
        id: ChannelId::new(id),
        name: name.to_string(),
        position,
        parent_id: None,
        overwrites: Vec::new(),
        kind: ChannelKind::Voice(VoiceSettings {
            bitrate,
            user_limit: 10,
            rtc_region: None,
        }),
    }
}

fn role_overwrite(role_id: u64, allow: Permissions, deny: Permissions) -> Overwrite {
    Overwrite {
        target: OverwriteTarget::Role(RoleId::new(role_id)),
        allow,
        deny,
    }
}

fn member_overwrite(user_id: UserId, allow: Permissions, deny: Permissions) -> Overwrite {
    Overwrite {
        target: OverwriteTarget::Member(user_id),
        allow,
        deny,
    }
}

/// Channel of `guild` with the given name.
fn find_channel<'g>(guild: &'g GuildSnapshot, name: &str) -> &'g ChannelSnapshot {
    guild
        .channels
        .iter()
        .find(|channel| channel.name == name)
        .unwrap_or_else(|| panic!("channel {} not found", name))
}

/// Role of `guild` with the given name.
fn find_role<'g>(guild: &'g GuildSnapshot, name: &str) -> &'g RoleSnapshot {
    guild
        .roles
        .iter()
        .find(|role| role.name == name)
        .unwrap_or_else(|| panic!("role {} not found", name))
}
