//! Working tree migration plan
//!
//! A migration turns the current working tree into the exact file set of a
//! target snapshot: every working file missing from the target is deleted,
//! and every target file is written from its blob.

use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    /// Working files the target does not track
    deletions: BTreeSet<String>,
    /// Every file of the target snapshot
    writes: FileMap,
}

impl Migration {
    pub fn plan(working_files: &BTreeSet<String>, target: &FileMap) -> Self {
        let deletions = working_files
            .iter()
            .filter(|name| !target.contains_key(*name))
            .cloned()
            .collect::<BTreeSet<_>>();

        tracing::debug!(
            deletions = deletions.len(),
            writes = target.len(),
            "planned working tree migration"
        );

        Migration {
            deletions,
            writes: target.clone(),
        }
    }

    pub fn deletions(&self) -> &BTreeSet<String> {
        &self.deletions
    }

    pub fn writes(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.writes.iter()
    }
}
