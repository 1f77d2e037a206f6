//! Text and voice channel replication.

use dioxus_logger::tracing;

use crate::{
    data::GuildApi,
    model::{
        channel::{ChannelKind, ChannelSnapshot, NewChannel, NewChannelKind},
        guild::MirrorScope,
        identity_map::{CategoryIdentityMap, RoleIdentityMap},
        report::{Action, EntityKind, Outcome, Phase, PhaseReport},
    },
    service::{overwrite, position::PositionSynchronizer},
};

pub struct ChannelReplicator<'a> {
    api: &'a dyn GuildApi,
    positions: PositionSynchronizer<'a>,
}

impl<'a> ChannelReplicator<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self {
            api,
            positions: PositionSynchronizer::new(api),
        }
    }

    /// Recreates every non-category source channel in ascending position order.
    ///
    /// Channels are nested under the mapped copy of their source category and carry
    /// their overwrites translated through `roles`. Channel kinds other than text and
    /// voice are recorded as skipped. A failed creation is logged and the loop moves
    /// on to the next channel.
    ///
    /// # Arguments
    /// - `scope` - Source, target, and acting user of the run
    /// - `roles` - Frozen role identity map from the role phase
    /// - `categories` - Frozen category identity map from the category phase
    pub async fn replicate(
        &self,
        scope: &MirrorScope<'_>,
        roles: &RoleIdentityMap,
        categories: &CategoryIdentityMap,
    ) -> PhaseReport {
        let mut report = PhaseReport::new(Phase::Channels);

        let mut channels: Vec<&ChannelSnapshot> = scope
            .source
            .channels
            .iter()
            .filter(|channel| !channel.is_category())
            .collect();
        channels.sort_by_key(|channel| (channel.position, channel.id));

        for channel in channels {
            let Some(blueprint) = blueprint(channel, scope, roles, categories) else {
                tracing::debug!("Skipping unsupported channel: {}", channel.name);
                report.record(
                    EntityKind::Channel,
                    &channel.name,
                    Action::Create,
                    Outcome::Skipped("unsupported channel type".to_string()),
                );
                continue;
            };

            let created = match self.api.create_channel(scope.target.id, &blueprint).await {
                Ok(channel_id) => channel_id,
                Err(e) => {
                    tracing::warn!("Could not create channel {}: {}", channel.name, e);
                    report.record(
                        EntityKind::Channel,
                        &channel.name,
                        Action::Create,
                        Outcome::Failed(e),
                    );
                    continue;
                }
            };

            match blueprint.kind {
                NewChannelKind::Voice(_) => tracing::info!("Created voice channel: {}", channel.name),
                _ => tracing::info!("Created text channel: {}", channel.name),
            }
            report.record(EntityKind::Channel, &channel.name, Action::Create, Outcome::Done);

            let outcome = self
                .positions
                .sync_channel(created, &channel.name, channel.position)
                .await;
            report.record(EntityKind::Channel, &channel.name, Action::Position, outcome);
        }

        report
    }
}

/// Creation request for a leaf channel, or `None` if its kind is not replicated.
///
/// The parent falls back to none when the source category was not replicated.
/// Voice bitrates are clamped to `MAX_VOICE_BITRATE`.
fn blueprint(
    channel: &ChannelSnapshot,
    scope: &MirrorScope<'_>,
    roles: &RoleIdentityMap,
    categories: &CategoryIdentityMap,
) -> Option<NewChannel> {
    let kind = match &channel.kind {
        ChannelKind::Text(text) => NewChannelKind::Text(text.clone()),
        ChannelKind::Voice(voice) => NewChannelKind::Voice(voice.clamped()),
        ChannelKind::Category | ChannelKind::Other(_) => return None,
    };

    Some(NewChannel {
        name: channel.name.clone(),
        kind,
        parent_id: channel.parent_id.and_then(|parent| categories.get(parent)),
        position: None,
        overwrites: overwrite::translate(&channel.overwrites, roles, scope),
    })
}
