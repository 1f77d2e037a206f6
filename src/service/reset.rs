//! Target guild reset.
//!
//! Removes the target's existing structure so the copy starts from a clean slate. The
//! rules, public updates, and system channels are kept because Discord refuses to
//! delete channels the guild still references. The everyone role cannot be deleted
//! and is never attempted.

use dioxus_logger::tracing;

use crate::{
    data::GuildApi,
    model::{
        guild::GuildSnapshot,
        report::{Action, EntityKind, Outcome, Phase, PhaseReport},
    },
};

/// Discord JSON error code returned when deleting a role that may not be deleted,
/// such as a role managed by an integration.
pub const UNDELETABLE_ROLE_CODE: isize = 50028;

pub struct GuildResetService<'a> {
    api: &'a dyn GuildApi,
}

impl<'a> GuildResetService<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self { api }
    }

    /// Deletes every unprotected channel and every role except everyone.
    ///
    /// Each deletion is attempted independently; a failure is logged and recorded,
    /// and the phase moves on to the next entity.
    pub async fn reset(&self, target: &GuildSnapshot) -> PhaseReport {
        let mut report = PhaseReport::new(Phase::Reset);

        tracing::info!("Deleting existing channels...");
        for channel in &target.channels {
            let kind = if channel.is_category() {
                EntityKind::Category
            } else {
                EntityKind::Channel
            };

            if target.protected.contains(channel.id) {
                tracing::info!("Skipping system channel: {}", channel.name);
                report.record(
                    kind,
                    &channel.name,
                    Action::Delete,
                    Outcome::Skipped("protected system channel".to_string()),
                );
                continue;
            }

            let outcome = match self.api.delete_channel(channel.id).await {
                Ok(()) => {
                    tracing::debug!("Deleted channel: {}", channel.name);
                    Outcome::Done
                }
                Err(e) => {
                    tracing::warn!("Could not delete channel {}: {}", channel.name, e);
                    Outcome::Failed(e)
                }
            };
            report.record(kind, &channel.name, Action::Delete, outcome);
        }

        tracing::info!("Deleting existing roles...");
        for role in target.roles.iter().filter(|role| !target.is_everyone(role.id)) {
            let outcome = match self.api.delete_role(target.id, role.id).await {
                Ok(()) => {
                    tracing::debug!("Deleted role: {}", role.name);
                    Outcome::Done
                }
                Err(e) if e.code() == Some(UNDELETABLE_ROLE_CODE) => {
                    tracing::info!("Skipping role that cannot be deleted: {}", role.name);
                    Outcome::Skipped("role cannot be deleted".to_string())
                }
                Err(e) => {
                    tracing::warn!("Could not delete role {}: {}", role.name, e);
                    Outcome::Failed(e)
                }
            };
            report.record(EntityKind::Role, &role.name, Action::Delete, outcome);
        }

        report
    }
}
