use std::time::Duration;

use serenity::all::GuildId;

use crate::{data::pacing::PacingPolicy, error::config::ConfigError};

pub struct Config {
    pub discord_token: String,

    pub source_guild_id: GuildId,
    pub target_guild_id: GuildId,

    pub pacing: PacingPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `DISCORD_TOKEN`, `SOURCE_GUILD_ID` and `TARGET_GUILD_ID` are required. Pacing
    /// falls back to `PacingPolicy::default()` for any unset value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = required(&lookup, "DISCORD_TOKEN")?;
        let source_guild_id = parse_guild_id(&lookup, "SOURCE_GUILD_ID")?;
        let target_guild_id = parse_guild_id(&lookup, "TARGET_GUILD_ID")?;

        if source_guild_id == target_guild_id {
            return Err(ConfigError::SameGuild(source_guild_id.get()));
        }

        let mut pacing = PacingPolicy::default();
        if let Some(delay) = optional_u64(&lookup, "MIRROR_REQUEST_DELAY_MS")? {
            pacing.min_interval = Duration::from_millis(delay);
        }
        if let Some(retries) = optional_u64(&lookup, "MIRROR_MAX_RETRIES")? {
            pacing.max_retries = u32::try_from(retries).map_err(|e| ConfigError::InvalidEnvVar {
                name: "MIRROR_MAX_RETRIES".to_string(),
                value: retries.to_string(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            discord_token,
            source_guild_id,
            target_guild_id,
            pacing,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_guild_id<F>(lookup: &F, name: &str) -> Result<GuildId, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = required(lookup, name)?;
    let id = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })?;

    // GuildId::new panics on zero
    if id == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "guild id must be non-zero".to_string(),
        });
    }

    Ok(GuildId::new(id))
}

fn optional_u64<F>(lookup: &F, name: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}
