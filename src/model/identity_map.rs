//! Source-to-target identity maps.
//!
//! A map is built by exactly one phase through an `IdentityMapBuilder` and frozen with
//! `finish`. The frozen `IdentityMap` has no mutating methods, so later phases can only
//! read it.

use std::collections::HashMap;
use std::hash::Hash;

use serenity::all::{ChannelId, RoleId};

/// Source role id -> target role id, built by the role replicator.
pub type RoleIdentityMap = IdentityMap<RoleId>;
/// Source category id -> target category id, built by the category replicator.
pub type CategoryIdentityMap = IdentityMap<ChannelId>;

/// Immutable mapping from source ids to the ids of their target copies.
#[derive(Debug, Clone)]
pub struct IdentityMap<Id> {
    entries: HashMap<Id, Id>,
}

impl<Id: Copy + Eq + Hash> IdentityMap<Id> {
    /// Target id for `source`, if the source entity was replicated.
    pub fn get(&self, source: Id) -> Option<Id> {
        self.entries.get(&source).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, source: Id) -> bool {
        self.entries.contains_key(&source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Id> Default for IdentityMap<Id> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

/// Append-only builder for an `IdentityMap`.
#[derive(Debug)]
pub struct IdentityMapBuilder<Id> {
    entries: HashMap<Id, Id>,
}

impl<Id: Copy + Eq + Hash> IdentityMapBuilder<Id> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Records `source -> target`.
    ///
    /// Entries are never replaced: returns `false` and keeps the existing mapping if
    /// `source` was already recorded.
    pub fn insert(&mut self, source: Id, target: Id) -> bool {
        if self.entries.contains_key(&source) {
            return false;
        }
        self.entries.insert(source, target);
        true
    }

    pub fn finish(self) -> IdentityMap<Id> {
        IdentityMap {
            entries: self.entries,
        }
    }
}

impl<Id: Copy + Eq + Hash> Default for IdentityMapBuilder<Id> {
    fn default() -> Self {
        Self::new()
    }
}
