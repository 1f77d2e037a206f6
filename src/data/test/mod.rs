use super::{
    fake::{acting_user, empty_guild, Call, FakeGuildApi},
    pacing::{PacedGuildApi, PacingPolicy},
    GuildApi,
};
use crate::{error::api::ApiError, model::role::NewRole};
use serenity::all::{GuildId, Permissions};
use std::time::Duration;
