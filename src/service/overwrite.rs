//! Permission overwrite translation.
//!
//! Source overwrites reference source role and user ids. Only overwrites that can be
//! expressed in the target's id space survive: roles present in the role identity
//! map, and the acting user, whose id is the same in both guilds.

use crate::model::{
    channel::ChannelSnapshot,
    guild::MirrorScope,
    identity_map::RoleIdentityMap,
    overwrite::{Overwrite, OverwriteTarget},
};

/// Overwrites for a replicated leaf channel.
///
/// Keeps role overwrites whose role was replicated, with the target role id
/// substituted, and member overwrites for the acting user unchanged. Everything else
/// is dropped.
pub fn translate(
    overwrites: &[Overwrite],
    roles: &RoleIdentityMap,
    scope: &MirrorScope<'_>,
) -> Vec<Overwrite> {
    overwrites
        .iter()
        .filter_map(|overwrite| match overwrite.target {
            OverwriteTarget::Role(role_id) => roles
                .get(role_id)
                .map(|mapped| overwrite.retarget(OverwriteTarget::Role(mapped))),
            OverwriteTarget::Member(user_id) if user_id == scope.acting_user.id => {
                Some(overwrite.clone())
            }
            OverwriteTarget::Member(_) => None,
        })
        .collect()
}

/// Overwrites for a replicated category.
///
/// Always exactly two entries: the target's everyone role carrying the source's
/// everyone overwrite, and the acting user carrying the source's overwrite for that
/// user. Either falls back to empty bitmasks when the source has none, so the acting
/// user keeps an explicit entry on every category.
pub fn for_category(category: &ChannelSnapshot, scope: &MirrorScope<'_>) -> Vec<Overwrite> {
    let source_everyone = OverwriteTarget::Role(scope.source.everyone_role_id());
    let target_everyone = OverwriteTarget::Role(scope.target.everyone_role_id());
    let acting_user = OverwriteTarget::Member(scope.acting_user.id);

    vec![
        copy_or_empty(category, source_everyone, target_everyone),
        copy_or_empty(category, acting_user, acting_user),
    ]
}

fn copy_or_empty(
    category: &ChannelSnapshot,
    source: OverwriteTarget,
    target: OverwriteTarget,
) -> Overwrite {
    category
        .overwrites
        .iter()
        .find(|overwrite| overwrite.target == source)
        .map(|overwrite| overwrite.retarget(target))
        .unwrap_or_else(|| Overwrite::empty(target))
}

