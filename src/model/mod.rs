//! Domain models for the mirror run.
//!
//! Snapshots capture the read-only state of a guild at the start of a run; blueprints
//! (`NewRole`, `NewChannel`) describe entities to create in the target; identity maps
//! translate source ids into target ids; reports record what happened to each entity.
//! Conversions from Serenity models happen here, at the data layer boundary.

pub mod channel;
pub mod guild;
pub mod identity_map;
pub mod overwrite;
pub mod report;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;
