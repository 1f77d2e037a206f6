//! Category replication.

use dioxus_logger::tracing;

use crate::{
    data::GuildApi,
    model::{
        channel::{ChannelSnapshot, NewChannel, NewChannelKind},
        guild::MirrorScope,
        identity_map::{CategoryIdentityMap, IdentityMapBuilder},
        report::{Action, EntityKind, Outcome, Phase, PhaseReport},
    },
    service::{overwrite, position::PositionSynchronizer},
};

pub struct CategoryReplicator<'a> {
    api: &'a dyn GuildApi,
    positions: PositionSynchronizer<'a>,
}

impl<'a> CategoryReplicator<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self {
            api,
            positions: PositionSynchronizer::new(api),
        }
    }

    /// Recreates every source category in ascending position order.
    ///
    /// Each category gets exactly the everyone and acting user overwrites (see
    /// `overwrite::for_category`), is created at the source position, and then has that
    /// position set explicitly. Categories that fail to create are left out of the
    /// returned map; their channels are later created without a parent.
    ///
    /// # Returns
    /// - `CategoryIdentityMap` - Source category id to created category id, frozen
    /// - `PhaseReport` - One entry per creation and per position update
    pub async fn replicate(&self, scope: &MirrorScope<'_>) -> (CategoryIdentityMap, PhaseReport) {
        let mut report = PhaseReport::new(Phase::Categories);
        let mut mapping = IdentityMapBuilder::new();

        let mut categories: Vec<&ChannelSnapshot> = scope
            .source
            .channels
            .iter()
            .filter(|channel| channel.is_category())
            .collect();
        categories.sort_by_key(|category| (category.position, category.id));

        for &category in &categories {
            let blueprint = NewChannel {
                name: category.name.clone(),
                kind: NewChannelKind::Category,
                parent_id: None,
                position: Some(category.position),
                overwrites: overwrite::for_category(category, scope),
            };

            let created = match self.api.create_channel(scope.target.id, &blueprint).await {
                Ok(channel_id) => channel_id,
                Err(e) => {
                    tracing::warn!("Could not create category {}: {}", category.name, e);
                    report.record(
                        EntityKind::Category,
                        &category.name,
                        Action::Create,
                        Outcome::Failed(e),
                    );
                    continue;
                }
            };

            mapping.insert(category.id, created);
            tracing::info!("Created category: {}", category.name);
            report.record(EntityKind::Category, &category.name, Action::Create, Outcome::Done);

            let outcome = self
                .positions
                .sync_channel(created, &category.name, category.position)
                .await;
            report.record(EntityKind::Category, &category.name, Action::Position, outcome);
        }

        let mapping = mapping.finish();
        tracing::info!("Copied {} of {} categories", mapping.len(), categories.len());
        (mapping, report)
    }
}
