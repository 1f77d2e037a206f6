//! Role replication.

use dioxus_logger::tracing;

use crate::{
    data::GuildApi,
    model::{
        guild::MirrorScope,
        identity_map::{IdentityMapBuilder, RoleIdentityMap},
        report::{Action, EntityKind, Outcome, Phase, PhaseReport},
        role::RoleSnapshot,
    },
    service::position::PositionSynchronizer,
};

pub struct RoleReplicator<'a> {
    api: &'a dyn GuildApi,
    positions: PositionSynchronizer<'a>,
}

impl<'a> RoleReplicator<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self {
            api,
            positions: PositionSynchronizer::new(api),
        }
    }

    /// Recreates every source role except everyone in the target guild.
    ///
    /// Roles are created from the highest position down so that creation order already
    /// approximates the source hierarchy, then each role's position is set explicitly.
    /// Name, colour, hoist, mentionable, and permissions are copied verbatim.
    ///
    /// A role that fails to create is logged and left out of the returned map, so
    /// overwrites referencing it are dropped later. A role whose position cannot be
    /// set is kept.
    ///
    /// # Returns
    /// - `RoleIdentityMap` - Source role id to created role id, frozen
    /// - `PhaseReport` - One entry per creation and per position update
    pub async fn replicate(&self, scope: &MirrorScope<'_>) -> (RoleIdentityMap, PhaseReport) {
        let mut report = PhaseReport::new(Phase::Roles);
        let mut mapping = IdentityMapBuilder::new();

        let roles = hierarchy_order(scope);
        for &role in &roles {
            let created = match self.api.create_role(scope.target.id, &role.to_new_role()).await {
                Ok(role_id) => role_id,
                Err(e) => {
                    tracing::warn!("Could not create role {}: {}", role.name, e);
                    report.record(EntityKind::Role, &role.name, Action::Create, Outcome::Failed(e));
                    continue;
                }
            };

            mapping.insert(role.id, created);
            tracing::info!("Created role: {}", role.name);
            report.record(EntityKind::Role, &role.name, Action::Create, Outcome::Done);

            let outcome = self
                .positions
                .sync_role(scope.target.id, created, &role.name, role.position)
                .await;
            report.record(EntityKind::Role, &role.name, Action::Position, outcome);
        }

        let mapping = mapping.finish();
        tracing::info!("Copied {} of {} roles", mapping.len(), roles.len());
        (mapping, report)
    }
}

/// Source roles except everyone, highest position first.
///
/// Ties are broken by id so the order is deterministic.
fn hierarchy_order<'s>(scope: &MirrorScope<'s>) -> Vec<&'s RoleSnapshot> {
    let source = scope.source;
    let mut roles: Vec<&RoleSnapshot> = source
        .roles
        .iter()
        .filter(|role| !source.is_everyone(role.id))
        .collect();
    roles.sort_by(|a, b| b.position.cmp(&a.position).then(a.id.cmp(&b.id)));
    roles
}
