use serenity::all::GuildId;
use thiserror::Error;

use crate::error::api::ApiError;

/// Fatal conditions that stop a mirror run before any phase executes.
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The token's own user could not be fetched.
    #[error("Failed to resolve the acting identity: {0}")]
    IdentityUnresolved(#[source] ApiError),

    /// The source guild could not be fetched. Check SOURCE_GUILD_ID.
    #[error("Source guild {guild_id} not found: {source}")]
    SourceUnresolved {
        guild_id: GuildId,
        #[source]
        source: ApiError,
    },

    /// The target guild could not be fetched. Check TARGET_GUILD_ID.
    #[error("Target guild {guild_id} not found: {source}")]
    TargetUnresolved {
        guild_id: GuildId,
        #[source]
        source: ApiError,
    },
}
