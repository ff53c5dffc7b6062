//! Staging area
//!
//! The index holds everything that differs between the head commit and the
//! next commit:
//! - `additions`: filenames mapped to the blob that will be committed for them
//! - `removals`: filenames that the next commit will stop tracking
//!
//! A filename is never in both at once. The index is part of the persisted
//! repository state and is cleared after every commit, merge commit, branch
//! checkout and reset.

use crate::artifacts::objects::commit::{FileMap, parent_names};
use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Staged filename to blob associations
    additions: BTreeMap<String, ObjectId>,
    /// Filenames marked for removal
    removals: BTreeSet<String>,
}

impl Index {
    /// Stage a blob for `name`, replacing any previous entry
    ///
    /// Staging a file also takes it back out of the removal set.
    pub fn stage(&mut self, name: &str, oid: ObjectId) {
        self.removals.remove(name);
        self.additions.insert(name.to_string(), oid);
    }

    /// Drop the staged entry for `name`, returning it if there was one
    pub fn unstage(&mut self, name: &str) -> Option<ObjectId> {
        self.additions.remove(name)
    }

    /// Mark `name` to be untracked by the next commit
    pub fn mark_removed(&mut self, name: &str) {
        self.additions.remove(name);
        self.removals.insert(name.to_string());
    }

    /// Take `name` back out of the removal set
    pub fn unmark_removed(&mut self, name: &str) -> bool {
        self.removals.remove(name)
    }

    /// Drop every entry that cannot coexist with a file at `name`
    ///
    /// A path is either a file or a directory. Files at one of the parent
    /// paths of `name`, or below `name` itself, are marked removed when
    /// `tracked` holds them and unstaged otherwise.
    pub fn discard_conflicts(&mut self, name: &str, tracked: &FileMap) {
        let prefix = format!("{name}/");
        let conflicts = parent_names(name)
            .map(str::to_string)
            .chain(
                tracked
                    .keys()
                    .chain(self.additions.keys())
                    .filter(|other| other.starts_with(&prefix))
                    .cloned(),
            )
            .collect::<BTreeSet<_>>();

        for other in conflicts {
            if tracked.contains_key(&other) {
                tracing::debug!(file = %other, replaced_by = %name, "discarding conflicting entry");
                self.mark_removed(&other);
            } else {
                self.unstage(&other);
            }
        }
    }

    pub fn staged(&self, name: &str) -> Option<&ObjectId> {
        self.additions.get(name)
    }

    pub fn is_staged(&self, name: &str) -> bool {
        self.additions.contains_key(name)
    }

    pub fn is_removed(&self, name: &str) -> bool {
        self.removals.contains(name)
    }

    pub fn additions(&self) -> &BTreeMap<String, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<String> {
        &self.removals
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }

    /// Apply the staged changes on top of a commit's file mapping
    pub fn apply_to(&self, files: &BTreeMap<String, ObjectId>) -> BTreeMap<String, ObjectId> {
        let mut files = files.clone();

        for (name, oid) in &self.additions {
            files.insert(name.clone(), oid.clone());
        }
        for name in &self.removals {
            files.remove(name);
        }

        files
    }
}
