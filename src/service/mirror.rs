//! Mirror run orchestration.

use chrono::Utc;
use dioxus_logger::tracing;
use serenity::all::GuildId;

use crate::{
    data::GuildApi,
    error::mirror::MirrorError,
    model::{
        guild::MirrorScope,
        report::{MirrorReport, Outcome},
    },
    service::{
        category::CategoryReplicator, channel::ChannelReplicator, identity::IdentityCopier,
        reset::GuildResetService, role::RoleReplicator,
    },
};

/// Runs the full mirror from a source guild to a target guild.
pub struct MirrorService<'a> {
    api: &'a dyn GuildApi,
}

impl<'a> MirrorService<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self { api }
    }

    /// Mirrors `source_id` onto `target_id`.
    ///
    /// Resolves the acting user and both guilds first; if any of them cannot be
    /// resolved the run stops before touching the target. After that every phase runs
    /// to completion regardless of per-entity failures, in the order reset, roles,
    /// categories, channels, identity.
    ///
    /// # Returns
    /// - `Ok(MirrorReport)` - Every phase ran; individual operations may have failed
    /// - `Err(MirrorError)` - The acting user, source, or target could not be resolved
    pub async fn run(&self, source_id: GuildId, target_id: GuildId) -> Result<MirrorReport, MirrorError> {
        let started_at = Utc::now();

        let acting_user = self
            .api
            .current_user()
            .await
            .map_err(MirrorError::IdentityUnresolved)?;
        tracing::info!("Logged in as {}", acting_user.name);

        let source = self
            .api
            .guild(source_id)
            .await
            .map_err(|source| MirrorError::SourceUnresolved {
                guild_id: source_id,
                source,
            })?;
        let target = self
            .api
            .guild(target_id)
            .await
            .map_err(|source| MirrorError::TargetUnresolved {
                guild_id: target_id,
                source,
            })?;

        tracing::info!(
            "Starting copy process from \"{}\" to \"{}\"...",
            source.name,
            target.name
        );

        let scope = MirrorScope {
            source: &source,
            target: &target,
            acting_user: &acting_user,
        };
        let mut phases = Vec::with_capacity(5);

        phases.push(GuildResetService::new(self.api).reset(&target).await);

        tracing::info!("Copying roles...");
        let (roles, report) = RoleReplicator::new(self.api).replicate(&scope).await;
        phases.push(report);

        tracing::info!("Copying channels...");
        let (categories, report) = CategoryReplicator::new(self.api).replicate(&scope).await;
        phases.push(report);

        phases.push(
            ChannelReplicator::new(self.api)
                .replicate(&scope, &roles, &categories)
                .await,
        );

        phases.push(IdentityCopier::new(self.api).copy(&scope).await);

        for phase in &phases {
            let totals = phase.totals();
            tracing::debug!(
                "Phase {}: {} done, {} skipped, {} failed",
                phase.phase,
                totals.done,
                totals.skipped,
                totals.failed
            );
            for entry in &phase.entries {
                if let Outcome::Skipped(reason) = &entry.outcome {
                    tracing::debug!(
                        "Skipped: {} {} {} ({})",
                        entry.action,
                        entry.kind,
                        entry.name,
                        reason
                    );
                }
            }
        }

        Ok(MirrorReport {
            started_at,
            finished_at: Utc::now(),
            phases,
        })
    }
}
