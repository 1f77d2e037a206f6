//! The mirror phases and their orchestration.
//!
//! `MirrorService::run` executes the phases strictly in order:
//!
//! 1. `reset` - delete the target's unprotected channels and its roles
//! 2. `role` - recreate source roles, building the role identity map
//! 3. `category` - recreate categories, building the category identity map
//! 4. `channel` - recreate text and voice channels under the mapped categories
//! 5. `identity` - copy the guild icon and name
//!
//! `position` is used by phases 2-4 after each creation; `overwrite` holds the
//! permission overwrite translation shared by phases 3 and 4.
//!
//! No per-entity failure leaves its loop iteration: each phase records an `Outcome`
//! per operation and continues.

pub mod category;
pub mod channel;
pub mod identity;
pub mod mirror;
pub mod overwrite;
pub mod position;
pub mod reset;
pub mod role;

#[cfg(test)]
mod test;
