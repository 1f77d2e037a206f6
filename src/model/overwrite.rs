use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId};

/// What a permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwriteTarget {
    Role(RoleId),
    Member(UserId),
}

/// Per-channel exception to a role's or member's base permissions.
///
/// Bitmasks are carried verbatim; overlapping allow and deny bits are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Overwrite {
    pub target: OverwriteTarget,
    pub allow: Permissions,
    pub deny: Permissions,
}

impl Overwrite {
    /// Overwrite that neither allows nor denies anything.
    pub fn empty(target: OverwriteTarget) -> Self {
        Self {
            target,
            allow: Permissions::empty(),
            deny: Permissions::empty(),
        }
    }

    /// Same bitmasks, applied to a different target.
    pub fn retarget(&self, target: OverwriteTarget) -> Self {
        Self {
            target,
            allow: self.allow,
            deny: self.deny,
        }
    }

    /// Converts a Serenity overwrite, returning `None` for target kinds the
    /// mirror does not understand.
    pub fn from_serenity(overwrite: &PermissionOverwrite) -> Option<Self> {
        let target = match overwrite.kind {
            PermissionOverwriteType::Role(role_id) => OverwriteTarget::Role(role_id),
            PermissionOverwriteType::Member(user_id) => OverwriteTarget::Member(user_id),
            _ => return None,
        };

        Some(Self {
            target,
            allow: overwrite.allow,
            deny: overwrite.deny,
        })
    }

    pub fn to_serenity(&self) -> PermissionOverwrite {
        let kind = match self.target {
            OverwriteTarget::Role(role_id) => PermissionOverwriteType::Role(role_id),
            OverwriteTarget::Member(user_id) => PermissionOverwriteType::Member(user_id),
        };

        PermissionOverwrite {
            allow: self.allow,
            deny: self.deny,
            kind,
        }
    }
}
