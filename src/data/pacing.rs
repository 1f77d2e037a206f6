//! Request pacing and rate-limit retries.
//!
//! `PacedGuildApi` wraps another `GuildApi` and enforces two rules on every call:
//!
//! - consecutive calls are separated by at least `PacingPolicy::min_interval`;
//! - a call rejected as rate limited is retried up to `PacingPolicy::max_retries` times
//!   with exponential backoff and jitter. Any other failure is returned immediately.

use std::future::Future;
use std::time::Duration;

use dioxus_logger::tracing;
use rand::Rng;
use serenity::all::{ChannelId, GuildId, RoleId};
use serenity::async_trait;
use tokio::{sync::Mutex, time::Instant};

use crate::{
    data::GuildApi,
    error::api::ApiError,
    model::{channel::NewChannel, guild::GuildSnapshot, role::NewRole, user::ActingUser},
};

/// Pacing and retry parameters for outbound API calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PacingPolicy {
    /// Minimum delay between the start of consecutive calls.
    pub min_interval: Duration,
    /// Retries allowed for a rate-limited call; the call is attempted at most `max_retries + 1` times.
    pub max_retries: u32,
    /// Backoff before the first retry; doubles on each further retry.
    pub base_backoff: Duration,
    /// Upper bound for a single backoff, jitter included.
    pub max_backoff: Duration,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_millis(250),
            max_retries: 3,
            base_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl PacingPolicy {
    /// Delay before retry number `attempt` (starting at 0).
    ///
    /// Exponential in `attempt` plus up to 25% random jitter. The result, jitter
    /// included, never exceeds `max_backoff`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponential = self
            .base_backoff
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_backoff);

        let jitter_ceiling = u64::try_from(exponential.as_millis() / 4).unwrap_or(u64::MAX);
        let jitter = if jitter_ceiling == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::rng().random_range(0..=jitter_ceiling))
        };

        (exponential + jitter).min(self.max_backoff)
    }
}

/// `GuildApi` decorator applying a `PacingPolicy` to every call.
pub struct PacedGuildApi<A> {
    inner: A,
    policy: PacingPolicy,
    /// Start time of the previous call
    last_call: Mutex<Option<Instant>>,
}

impl<A: GuildApi> PacedGuildApi<A> {
    pub fn new(inner: A, policy: PacingPolicy) -> Self {
        Self {
            inner,
            policy,
            last_call: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Waits until `min_interval` has passed since the previous call started.
    async fn wait_turn(&self) {
        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            let ready_at = previous + self.policy.min_interval;
            if ready_at > Instant::now() {
                tokio::time::sleep_until(ready_at).await;
            }
        }

        *last_call = Some(Instant::now());
    }

    /// Runs `operation` under the pacing policy.
    ///
    /// # Arguments
    /// - `name` - Operation name for log messages
    /// - `operation` - Produces a fresh request future for every attempt
    async fn call<T, F, Fut>(&self, name: &str, mut operation: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<T, ApiError>> + Send,
        T: Send,
    {
        let mut attempt = 0;

        loop {
            self.wait_turn().await;

            match operation().await {
                Err(e) if e.is_rate_limited() && attempt < self.policy.max_retries => {
                    let delay = self.policy.backoff(attempt);
                    attempt += 1;
                    tracing::warn!(
                        "Rate limited during {}, retry {}/{} in {}ms",
                        name,
                        attempt,
                        self.policy.max_retries,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}

#[async_trait]
impl<A: GuildApi> GuildApi for PacedGuildApi<A> {
    async fn current_user(&self) -> Result<ActingUser, ApiError> {
        let inner = &self.inner;
        self.call("current_user", move || inner.current_user()).await
    }

    async fn guild(&self, guild_id: GuildId) -> Result<GuildSnapshot, ApiError> {
        let inner = &self.inner;
        self.call("guild", move || inner.guild(guild_id)).await
    }

    async fn create_role(&self, guild_id: GuildId, role: &NewRole) -> Result<RoleId, ApiError> {
        let inner = &self.inner;
        self.call("create_role", move || inner.create_role(guild_id, role))
            .await
    }

    async fn delete_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<(), ApiError> {
        let inner = &self.inner;
        self.call("delete_role", move || inner.delete_role(guild_id, role_id))
            .await
    }

    async fn set_role_position(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        position: u16,
    ) -> Result<(), ApiError> {
        let inner = &self.inner;
        self.call("set_role_position", move || {
            inner.set_role_position(guild_id, role_id, position)
        })
        .await
    }

    async fn create_channel(
        &self,
        guild_id: GuildId,
        channel: &NewChannel,
    ) -> Result<ChannelId, ApiError> {
        let inner = &self.inner;
        self.call("create_channel", move || inner.create_channel(guild_id, channel))
            .await
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ApiError> {
        let inner = &self.inner;
        self.call("delete_channel", move || inner.delete_channel(channel_id))
            .await
    }

    async fn set_channel_position(&self, channel_id: ChannelId, position: u16) -> Result<(), ApiError> {
        let inner = &self.inner;
        self.call("set_channel_position", move || {
            inner.set_channel_position(channel_id, position)
        })
        .await
    }

    async fn set_guild_name(&self, guild_id: GuildId, name: &str) -> Result<(), ApiError> {
        let inner = &self.inner;
        self.call("set_guild_name", move || inner.set_guild_name(guild_id, name))
            .await
    }

    async fn set_guild_icon(&self, guild_id: GuildId, icon_url: &str) -> Result<(), ApiError> {
        let inner = &self.inner;
        self.call("set_guild_icon", move || inner.set_guild_icon(guild_id, icon_url))
            .await
    }
}
