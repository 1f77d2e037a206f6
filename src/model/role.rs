//! Guild role domain models.
//!
//! Provides the read-only snapshot of a source or target role and the blueprint used
//! to create a copy of it in the target guild.

use serenity::all::{Permissions, Role, RoleId};

/// Role as it exists in a guild at the start of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSnapshot {
    /// Discord role ID.
    pub id: RoleId,
    /// Role display name.
    pub name: String,
    /// Role color as a 24-bit RGB integer.
    pub colour: u32,
    /// Whether members with this role are displayed separately.
    pub hoist: bool,
    /// Whether anyone can mention the role.
    pub mentionable: bool,
    /// Permission bitmask granted by the role.
    pub permissions: Permissions,
    /// Position in the role hierarchy (higher = more important).
    pub position: u16,
}

impl RoleSnapshot {
    /// Converts a Serenity role to a snapshot at the data layer boundary.
    pub fn from_serenity(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            colour: role.colour.0,
            hoist: role.hoist,
            mentionable: role.mentionable,
            permissions: role.permissions,
            position: role.position,
        }
    }

    /// Blueprint for an identical role in another guild.
    pub fn to_new_role(&self) -> NewRole {
        NewRole {
            name: self.name.clone(),
            colour: self.colour,
            hoist: self.hoist,
            mentionable: self.mentionable,
            permissions: self.permissions,
            position: self.position,
        }
    }
}

/// Attributes of a role to create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub name: String,
    pub colour: u32,
    pub hoist: bool,
    pub mentionable: bool,
    pub permissions: Permissions,
    pub position: u16,
}
