//! Three-way merge
//!
//! - `split_point`: the commit both branches diverged from
//! - `resolution`: per-file decisions between split point, head and branch
//! - `conflict`: conflict marker rendering
//!
//! The merge command in `commands::porcelain::merge` drives these against the
//! repository and reports a [`MergeOutcome`].

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;

pub mod conflict;
pub mod resolution;
pub mod split_point;

/// Result of merging a branch into the active branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The given branch is already part of the active branch's history
    AlreadyUpToDate,
    /// The active branch was moved to the given branch's head
    FastForwarded { head: ObjectId },
    /// A merge commit was created
    Merged {
        commit: ObjectId,
        /// Files written with conflict markers, and branch files left out
        /// because they collide with the head's files
        conflicts: BTreeSet<String>,
    },
}

impl MergeOutcome {
    pub fn has_conflicts(&self) -> bool {
        matches!(self, MergeOutcome::Merged { conflicts, .. } if !conflicts.is_empty())
    }
}
