//! Per-file merge decisions
//!
//! Every filename tracked by the split point, the head, or the merged branch
//! is classified by comparing its three blob ids (absence included):
//!
//! | split vs branch | split vs head | head vs branch | result      |
//! |-----------------|---------------|----------------|-------------|
//! | same            | any           | any            | keep head   |
//! | changed         | same          | any            | take branch |
//! | changed         | changed       | same           | keep head   |
//! | changed         | changed       | different      | conflict    |
//!
//! Taking the branch side of a file the branch deleted means removing it.
//!
//! A branch-side file is blocked when its path collides with a file the head
//! keeps: a head file at one of its parent paths, or head files below it. The
//! head layout wins and the path is reported as a conflict.

use crate::artifacts::objects::commit::{FileMap, parent_names};
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Leave the head version (or absence) in place
    KeepHead,
    /// Write the branch version and stage it
    TakeBranch(ObjectId),
    /// Delete the file and mark it removed
    Remove,
    /// Both sides changed the file differently
    Conflict {
        head: Option<ObjectId>,
        branch: Option<ObjectId>,
    },
    /// The branch file would replace `by`, a file or directory the head keeps
    Blocked { by: String },
}

impl Resolution {
    pub fn resolve(
        split: Option<&ObjectId>,
        head: Option<&ObjectId>,
        branch: Option<&ObjectId>,
    ) -> Self {
        if split == branch {
            Resolution::KeepHead
        } else if split == head {
            match branch {
                Some(oid) => Resolution::TakeBranch(oid.clone()),
                None => Resolution::Remove,
            }
        } else if head == branch {
            Resolution::KeepHead
        } else {
            Resolution::Conflict {
                head: head.cloned(),
                branch: branch.cloned(),
            }
        }
    }

    /// Whether applying this writes a file the head does not have
    fn introduces_branch_file(&self) -> bool {
        matches!(
            self,
            Resolution::TakeBranch(_) | Resolution::Conflict { head: None, .. }
        )
    }
}

/// Decisions for every file that does not simply keep its head version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    actions: BTreeMap<String, Resolution>,
}

impl MergePlan {
    pub fn new(split: &FileMap, head: &FileMap, branch: &FileMap) -> Self {
        let names = split
            .keys()
            .chain(head.keys())
            .chain(branch.keys())
            .collect::<BTreeSet<_>>();

        let mut actions = names
            .into_iter()
            .filter_map(|name| {
                let resolution =
                    Resolution::resolve(split.get(name), head.get(name), branch.get(name));
                tracing::trace!(file = %name, ?resolution, "resolved merge entry");

                (resolution != Resolution::KeepHead).then(|| (name.clone(), resolution))
            })
            .collect::<BTreeMap<_, _>>();

        let kept = head
            .keys()
            .filter(|name| actions.get(*name) != Some(&Resolution::Remove))
            .map(String::as_str)
            .collect::<BTreeSet<_>>();
        let blocked = actions
            .iter()
            .filter(|(_, resolution)| resolution.introduces_branch_file())
            .filter_map(|(name, _)| {
                let by = Self::colliding_file(name, &kept)?;
                tracing::debug!(file = %name, %by, "branch file collides with head layout");

                Some((name.clone(), Resolution::Blocked { by }))
            })
            .collect::<Vec<_>>();
        actions.extend(blocked);

        MergePlan { actions }
    }

    fn colliding_file(name: &str, kept: &BTreeSet<&str>) -> Option<String> {
        let prefix = format!("{name}/");

        parent_names(name)
            .find(|parent| kept.contains(parent))
            .or_else(|| kept.iter().copied().find(|other| other.starts_with(&prefix)))
            .map(str::to_string)
    }

    pub fn actions(&self) -> impl Iterator<Item = (&String, &Resolution)> {
        self.actions.iter()
    }

    pub fn conflicts(&self) -> BTreeSet<String> {
        self.actions
            .iter()
            .filter(|(_, resolution)| {
                matches!(
                    resolution,
                    Resolution::Conflict { .. } | Resolution::Blocked { .. }
                )
            })
            .map(|(name, _)| name.clone())
            .collect()
    }
}
