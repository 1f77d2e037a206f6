use dioxus_logger::tracing;

use crate::{
    data::GuildApi,
    model::{
        guild::MirrorScope,
        report::{Action, EntityKind, Outcome, Phase, PhaseReport},
    },
};

/// Copies the source guild's icon and name onto the target.
///
/// Both updates are cosmetic and independent: either may fail without affecting the
/// other or the overall result of the run.
pub struct IdentityCopier<'a> {
    api: &'a dyn GuildApi,
}

impl<'a> IdentityCopier<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self { api }
    }

    pub async fn copy(&self, scope: &MirrorScope<'_>) -> PhaseReport {
        let mut report = PhaseReport::new(Phase::Identity);
        let source = scope.source;
        let target = scope.target;

        let icon = match &source.icon_url {
            Some(icon_url) => match self.api.set_guild_icon(target.id, icon_url).await {
                Ok(()) => {
                    tracing::info!("Copied server icon");
                    Outcome::Done
                }
                Err(e) => {
                    tracing::warn!("Could not set guild icon: {}", e);
                    Outcome::Failed(e)
                }
            },
            None => Outcome::Skipped("source guild has no icon".to_string()),
        };
        report.record(EntityKind::Guild, &source.name, Action::Icon, icon);

        let name = match self.api.set_guild_name(target.id, &source.name).await {
            Ok(()) => {
                tracing::info!("Set server name");
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!("Could not set guild name: {}", e);
                Outcome::Failed(e)
            }
        };
        report.record(EntityKind::Guild, &source.name, Action::Rename, name);

        report
    }
}
