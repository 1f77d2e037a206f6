//! Per-entity outcomes and run reports.
//!
//! Every create, delete, reposition, or cosmetic update the mirror attempts ends in an
//! `Outcome`. Phases collect them into a `PhaseReport`; the run collects phase reports
//! into a `MirrorReport` used for the final summary.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::api::ApiError;

/// Mirror phase, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Reset,
    Roles,
    Categories,
    Channels,
    Identity,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reset => "reset",
            Self::Roles => "roles",
            Self::Categories => "categories",
            Self::Channels => "channels",
            Self::Identity => "identity",
        };
        f.write_str(name)
    }
}

/// Kind of entity an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Role,
    Category,
    Channel,
    Guild,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Role => "role",
            Self::Category => "category",
            Self::Channel => "channel",
            Self::Guild => "guild",
        };
        f.write_str(name)
    }
}

/// The operation attempted on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Delete,
    Create,
    Position,
    Rename,
    Icon,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Delete => "delete",
            Self::Create => "create",
            Self::Position => "reposition",
            Self::Rename => "rename",
            Self::Icon => "set icon of",
        };
        f.write_str(verb)
    }
}

/// Result of one per-entity operation.
#[derive(Debug)]
pub enum Outcome {
    Done,
    /// Not attempted or intentionally ignored, with the reason.
    Skipped(String),
    Failed(ApiError),
}

#[cfg(test)]
impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One recorded operation.
#[derive(Debug)]
pub struct EntityReport {
    pub kind: EntityKind,
    pub name: String,
    pub action: Action,
    pub outcome: Outcome,
}

/// Outcome counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub done: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Totals {
    fn add(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Done => self.done += 1,
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Every operation attempted during one phase, in order.
#[derive(Debug)]
pub struct PhaseReport {
    pub phase: Phase,
    pub entries: Vec<EntityReport>,
}

impl PhaseReport {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: EntityKind, name: &str, action: Action, outcome: Outcome) {
        self.entries.push(EntityReport {
            kind,
            name: name.to_string(),
            action,
            outcome,
        });
    }

    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for entry in &self.entries {
            totals.add(&entry.outcome);
        }
        totals
    }

    /// Entries for one action, in the order they were recorded.
    #[cfg(test)]
    pub fn entries_for(&self, action: Action) -> impl Iterator<Item = &EntityReport> {
        self.entries.iter().filter(move |entry| entry.action == action)
    }
}

/// Report of a complete run.
#[derive(Debug)]
pub struct MirrorReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub phases: Vec<PhaseReport>,
}

impl MirrorReport {
    #[cfg(test)]
    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|report| report.phase == phase)
    }

    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for entry in self.phases.iter().flat_map(|report| &report.entries) {
            totals.add(&entry.outcome);
        }
        totals
    }

    /// Failed operations across all phases, with their errors, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = (&EntityReport, &ApiError)> {
        self.phases
            .iter()
            .flat_map(|report| &report.entries)
            .filter_map(|entry| match &entry.outcome {
                Outcome::Failed(e) => Some((entry, e)),
                _ => None,
            })
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }
}
