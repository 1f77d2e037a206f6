//! Discord implementation of the guild API.
//!
//! Uses Serenity's REST client only. A mirror run is a short sequence of requests, so no
//! gateway connection or cache is established. Serenity's built-in ratelimiter still
//! applies to every request made here.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, ChannelType, CreateAttachment, CreateChannel, EditChannel, EditGuild, EditRole,
    GuildId, RoleId,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::{
    data::GuildApi,
    error::api::ApiError,
    model::{
        channel::{NewChannel, NewChannelKind},
        guild::GuildSnapshot,
        role::NewRole,
        user::ActingUser,
    },
};

/// File name used when the icon URL has no usable last path segment.
const FALLBACK_ICON_NAME: &str = "icon.png";

pub struct DiscordGuildApi {
    /// Discord REST client
    http: Arc<Http>,
    /// Plain HTTP client for downloading the source icon
    http_client: reqwest::Client,
}

impl DiscordGuildApi {
    pub fn new(http: Arc<Http>, http_client: reqwest::Client) -> Self {
        Self { http, http_client }
    }

    /// Downloads an image and wraps it as an attachment named after the URL's file name.
    async fn fetch_icon(&self, icon_url: &str) -> Result<CreateAttachment, ApiError> {
        let response = self
            .http_client
            .get(icon_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ApiError::Icon(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Icon(e.to_string()))?;

        Ok(CreateAttachment::bytes(bytes.to_vec(), icon_file_name(icon_url)))
    }
}

#[async_trait]
impl GuildApi for DiscordGuildApi {
    async fn current_user(&self) -> Result<ActingUser, ApiError> {
        let user = self.http.get_current_user().await?;

        Ok(ActingUser {
            id: user.id,
            name: user.name.clone(),
        })
    }

    async fn guild(&self, guild_id: GuildId) -> Result<GuildSnapshot, ApiError> {
        let guild = self.http.get_guild(guild_id).await?;
        let channels = self.http.get_channels(guild_id).await?;

        tracing::debug!(
            "Fetched guild {} ({}) with {} roles and {} channels",
            guild.name,
            guild_id,
            guild.roles.len(),
            channels.len()
        );

        Ok(GuildSnapshot::from_serenity(&guild, &channels))
    }

    async fn create_role(&self, guild_id: GuildId, role: &NewRole) -> Result<RoleId, ApiError> {
        let builder = EditRole::new()
            .name(role.name.clone())
            .colour(role.colour)
            .hoist(role.hoist)
            .mentionable(role.mentionable)
            .permissions(role.permissions)
            .position(role.position);

        let created = guild_id.create_role(&self.http, builder).await?;

        Ok(created.id)
    }

    async fn delete_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<(), ApiError> {
        guild_id.delete_role(&self.http, role_id).await?;

        Ok(())
    }

    async fn set_role_position(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        position: u16,
    ) -> Result<(), ApiError> {
        guild_id
            .edit_role_position(&self.http, role_id, position)
            .await?;

        Ok(())
    }

    async fn create_channel(
        &self,
        guild_id: GuildId,
        channel: &NewChannel,
    ) -> Result<ChannelId, ApiError> {
        let created = guild_id
            .create_channel(&self.http, create_channel_builder(channel))
            .await?;

        Ok(created.id)
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ApiError> {
        channel_id.delete(&self.http).await?;

        Ok(())
    }

    async fn set_channel_position(&self, channel_id: ChannelId, position: u16) -> Result<(), ApiError> {
        channel_id
            .edit(&self.http, EditChannel::new().position(position))
            .await?;

        Ok(())
    }

    async fn set_guild_name(&self, guild_id: GuildId, name: &str) -> Result<(), ApiError> {
        guild_id
            .edit(&self.http, EditGuild::new().name(name))
            .await?;

        Ok(())
    }

    async fn set_guild_icon(&self, guild_id: GuildId, icon_url: &str) -> Result<(), ApiError> {
        let icon = self.fetch_icon(icon_url).await?;

        guild_id
            .edit(&self.http, EditGuild::new().icon(Some(&icon)))
            .await?;

        Ok(())
    }
}

/// Translates a channel blueprint into Serenity's channel creation request.
fn create_channel_builder(channel: &NewChannel) -> CreateChannel<'static> {
    let mut builder = CreateChannel::new(channel.name.clone())
        .permissions(channel.overwrites.iter().map(|overwrite| overwrite.to_serenity()));

    if let Some(parent_id) = channel.parent_id {
        builder = builder.category(parent_id);
    }
    if let Some(position) = channel.position {
        builder = builder.position(position);
    }

    match &channel.kind {
        NewChannelKind::Category => builder.kind(ChannelType::Category),
        NewChannelKind::Text(text) => {
            builder = builder
                .kind(ChannelType::Text)
                .rate_limit_per_user(text.slow_mode)
                .nsfw(text.nsfw);
            if let Some(topic) = &text.topic {
                builder = builder.topic(topic.clone());
            }
            builder
        }
        NewChannelKind::Voice(voice) => {
            builder = builder
                .kind(ChannelType::Voice)
                .bitrate(voice.bitrate)
                .user_limit(voice.user_limit);
            if let Some(region) = &voice.rtc_region {
                builder = builder.rtc_region(region.clone());
            }
            builder
        }
    }
}

/// Last path segment of the icon URL, ignoring any query string.
fn icon_file_name(icon_url: &str) -> String {
    url::Url::parse(icon_url)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_ICON_NAME.to_string())
}
