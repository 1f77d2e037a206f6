use std::{str::FromStr, sync::Arc, time::Duration};

use dioxus_logger::tracing::{self, Level};
use serenity::http::Http;

use crate::config::Config;

/// Timeout for plain HTTP downloads such as the source guild icon.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Initializes operator-facing logging.
///
/// The level comes from `MIRROR_LOG_LEVEL` (`error`, `warn`, `info`, `debug`, `trace`)
/// and defaults to `info`. Runs before configuration is loaded so configuration
/// errors are logged too.
pub fn init_logger() {
    let level = std::env::var("MIRROR_LOG_LEVEL")
        .ok()
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(Level::INFO);

    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Creates the Discord REST client for the configured token.
///
/// No request is made here; the token is validated by the first call of the run,
/// which resolves the acting user.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    tracing::debug!(
        "Creating Discord HTTP client (request interval {}ms, {} retries)",
        config.pacing.min_interval.as_millis(),
        config.pacing.max_retries
    );

    Arc::new(Http::new(&config.discord_token))
}

/// Creates the HTTP client used to download guild icons.
pub fn setup_reqwest_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()
}
