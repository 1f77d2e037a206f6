//! In-memory `GuildApi` for tests.
//!
//! Holds guild snapshots and applies every mutation to them, recording each call. Like
//! Discord, it ignores the position requested at creation time: roles are created at
//! position 1 and channels at position 0 until a position is set explicitly.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use serenity::all::{ChannelId, GuildId, RoleId};
use serenity::async_trait;

use crate::{
    data::GuildApi,
    error::api::ApiError,
    model::{
        channel::{ChannelKind, ChannelSnapshot, NewChannel, NewChannelKind},
        guild::GuildSnapshot,
        role::{NewRole, RoleSnapshot},
        user::ActingUser,
    },
};

/// First id handed out to created entities.
const FIRST_CREATED_ID: u64 = 900_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CurrentUser,
    Guild(GuildId),
    CreateRole(GuildId, String),
    DeleteRole(GuildId, RoleId),
    SetRolePosition(GuildId, RoleId, u16),
    CreateChannel(GuildId, String),
    DeleteChannel(ChannelId),
    SetChannelPosition(ChannelId, u16),
    SetGuildName(GuildId, String),
    SetGuildIcon(GuildId, String),
}

#[derive(Default)]
struct FakeState {
    acting_user: Option<ActingUser>,
    guilds: HashMap<GuildId, GuildSnapshot>,
    next_id: u64,
    calls: Vec<Call>,
    failing_channel_deletes: HashSet<ChannelId>,
    rejected_role_deletes: HashMap<RoleId, isize>,
    failing_role_creates: HashSet<String>,
    failing_channel_creates: HashSet<String>,
    fail_positions: bool,
    fail_icon: bool,
    fail_name: bool,
    rate_limits: HashMap<&'static str, u32>,
}

impl FakeState {
    fn next_id(&mut self) -> u64 {
        let id = FIRST_CREATED_ID + self.next_id;
        self.next_id += 1;
        id
    }

    /// Consumes one pending rate limit for `operation`, if any.
    fn take_rate_limit(&mut self, operation: &'static str) -> Result<(), ApiError> {
        match self.rate_limits.get_mut(operation) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                Err(ApiError::RateLimited)
            }
            _ => Ok(()),
        }
    }

    fn guild_mut(&mut self, guild_id: GuildId) -> Result<&mut GuildSnapshot, ApiError> {
        self.guilds.get_mut(&guild_id).ok_or_else(|| unknown("Unknown Guild", 10004))
    }

    fn channel_mut(&mut self, channel_id: ChannelId) -> Result<&mut ChannelSnapshot, ApiError> {
        self.guilds
            .values_mut()
            .flat_map(|guild| guild.channels.iter_mut())
            .find(|channel| channel.id == channel_id)
            .ok_or_else(|| unknown("Unknown Channel", 10003))
    }
}

fn unknown(message: &str, code: isize) -> ApiError {
    ApiError::Rejected {
        status: 404,
        code,
        message: message.to_string(),
    }
}

fn missing_permissions() -> ApiError {
    ApiError::Rejected {
        status: 403,
        code: 50013,
        message: "Missing Permissions".to_string(),
    }
}

pub struct FakeGuildApi {
    state: Mutex<FakeState>,
}

impl FakeGuildApi {
    pub fn new(acting_user: ActingUser) -> Self {
        Self {
            state: Mutex::new(FakeState {
                acting_user: Some(acting_user),
                ..FakeState::default()
            }),
        }
    }

    /// A fake whose credentials do not resolve to a user.
    pub fn unauthenticated() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
        }
    }

    pub fn with_guild(self, guild: GuildSnapshot) -> Self {
        self.state.lock().unwrap().guilds.insert(guild.id, guild);
        self
    }

    pub fn guild_state(&self, guild_id: GuildId) -> GuildSnapshot {
        self.state.lock().unwrap().guilds[&guild_id].clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls that change state (everything except lookups).
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::CurrentUser | Call::Guild(_)))
            .collect()
    }

    pub fn fail_channel_delete(&self, channel_id: ChannelId) {
        self.state.lock().unwrap().failing_channel_deletes.insert(channel_id);
    }

    pub fn reject_role_delete(&self, role_id: RoleId, code: isize) {
        self.state.lock().unwrap().rejected_role_deletes.insert(role_id, code);
    }

    pub fn fail_role_create(&self, name: &str) {
        self.state.lock().unwrap().failing_role_creates.insert(name.to_string());
    }

    pub fn fail_channel_create(&self, name: &str) {
        self.state.lock().unwrap().failing_channel_creates.insert(name.to_string());
    }

    pub fn fail_positions(&self) {
        self.state.lock().unwrap().fail_positions = true;
    }

    pub fn fail_icon(&self) {
        self.state.lock().unwrap().fail_icon = true;
    }

    pub fn fail_name(&self) {
        self.state.lock().unwrap().fail_name = true;
    }

    /// Answers the next `times` calls of `operation` with a rate-limit error.
    pub fn rate_limit(&self, operation: &'static str, times: u32) {
        self.state.lock().unwrap().rate_limits.insert(operation, times);
    }
}

#[async_trait]
impl GuildApi for FakeGuildApi {
    async fn current_user(&self) -> Result<ActingUser, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CurrentUser);
        state.take_rate_limit("current_user")?;
        state.acting_user.clone().ok_or(ApiError::Rejected {
            status: 401,
            code: 0,
            message: "401: Unauthorized".to_string(),
        })
    }

    async fn guild(&self, guild_id: GuildId) -> Result<GuildSnapshot, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Guild(guild_id));
        state.take_rate_limit("guild")?;
        state.guild_mut(guild_id).map(|guild| guild.clone())
    }

    async fn create_role(&self, guild_id: GuildId, role: &NewRole) -> Result<RoleId, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateRole(guild_id, role.name.clone()));
        state.take_rate_limit("create_role")?;
        if state.failing_role_creates.contains(&role.name) {
            return Err(missing_permissions());
        }

        let role_id = RoleId::new(state.next_id());
        state.guild_mut(guild_id)?.roles.push(RoleSnapshot {
            id: role_id,
            name: role.name.clone(),
            colour: role.colour,
            hoist: role.hoist,
            mentionable: role.mentionable,
            permissions: role.permissions,
            position: 1,
        });
        Ok(role_id)
    }

    async fn delete_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::DeleteRole(guild_id, role_id));
        state.take_rate_limit("delete_role")?;
        if let Some(code) = state.rejected_role_deletes.get(&role_id).copied() {
            return Err(ApiError::Rejected {
                status: 400,
                code,
                message: "Invalid Role".to_string(),
            });
        }

        let guild = state.guild_mut(guild_id)?;
        let before = guild.roles.len();
        guild.roles.retain(|role| role.id != role_id);
        if guild.roles.len() == before {
            return Err(unknown("Unknown Role", 10011));
        }
        Ok(())
    }

    async fn set_role_position(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        position: u16,
    ) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::SetRolePosition(guild_id, role_id, position));
        state.take_rate_limit("set_role_position")?;
        if state.fail_positions {
            return Err(missing_permissions());
        }

        let role = state
            .guild_mut(guild_id)?
            .roles
            .iter_mut()
            .find(|role| role.id == role_id)
            .ok_or_else(|| unknown("Unknown Role", 10011))?;
        role.position = position;
        Ok(())
    }

    async fn create_channel(
        &self,
        guild_id: GuildId,
        channel: &NewChannel,
    ) -> Result<ChannelId, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateChannel(guild_id, channel.name.clone()));
        state.take_rate_limit("create_channel")?;
        if state.failing_channel_creates.contains(&channel.name) {
            return Err(missing_permissions());
        }

        let channel_id = ChannelId::new(state.next_id());
        let kind = match &channel.kind {
            NewChannelKind::Category => ChannelKind::Category,
            NewChannelKind::Text(text) => ChannelKind::Text(text.clone()),
            NewChannelKind::Voice(voice) => ChannelKind::Voice(voice.clone()),
        };
        state.guild_mut(guild_id)?.channels.push(ChannelSnapshot {
            id: channel_id,
            name: channel.name.clone(),
            position: 0,
            parent_id: channel.parent_id,
            overwrites: channel.overwrites.clone(),
            kind,
        });
        Ok(channel_id)
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::DeleteChannel(channel_id));
        state.take_rate_limit("delete_channel")?;
        if state.failing_channel_deletes.contains(&channel_id) {
            return Err(missing_permissions());
        }

        for guild in state.guilds.values_mut() {
            let before = guild.channels.len();
            guild.channels.retain(|channel| channel.id != channel_id);
            if guild.channels.len() != before {
                return Ok(());
            }
        }
        Err(unknown("Unknown Channel", 10003))
    }

    async fn set_channel_position(&self, channel_id: ChannelId, position: u16) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::SetChannelPosition(channel_id, position));
        state.take_rate_limit("set_channel_position")?;
        if state.fail_positions {
            return Err(missing_permissions());
        }

        state.channel_mut(channel_id)?.position = position;
        Ok(())
    }

    async fn set_guild_name(&self, guild_id: GuildId, name: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::SetGuildName(guild_id, name.to_string()));
        state.take_rate_limit("set_guild_name")?;
        if state.fail_name {
            return Err(missing_permissions());
        }

        state.guild_mut(guild_id)?.name = name.to_string();
        Ok(())
    }

    async fn set_guild_icon(&self, guild_id: GuildId, icon_url: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::SetGuildIcon(guild_id, icon_url.to_string()));
        state.take_rate_limit("set_guild_icon")?;
        if state.fail_icon {
            return Err(ApiError::Icon("404 Not Found".to_string()));
        }

        state.guild_mut(guild_id)?.icon_url = Some(icon_url.to_string());
        Ok(())
    }
}

/// The acting identity used across tests.
pub fn acting_user() -> ActingUser {
    ActingUser {
        id: serenity::all::UserId::new(777),
        name: "mirror-bot".to_string(),
    }
}

/// Guild with only its everyone role and no channels.
pub fn empty_guild(guild_id: u64, name: &str) -> GuildSnapshot {
    GuildSnapshot {
        id: GuildId::new(guild_id),
        name: name.to_string(),
        icon_url: None,
        roles: vec![RoleSnapshot {
            id: RoleId::new(guild_id),
            name: "@everyone".to_string(),
            colour: 0,
            hoist: false,
            mentionable: false,
            permissions: serenity::all::Permissions::empty(),
            position: 0,
        }],
        channels: Vec::new(),
        protected: Default::default(),
    }
}
