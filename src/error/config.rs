use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The mirror requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The value as read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Source and target refer to the same guild.
    ///
    /// Mirroring a guild onto itself would delete every channel and role it has.
    #[error("SOURCE_GUILD_ID and TARGET_GUILD_ID must differ, both are {0}")]
    SameGuild(u64),
}
