use crate::areas::repository::Repository;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::conflict::conflict_markers;
use crate::artifacts::merge::resolution::{MergePlan, Resolution};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;

const ANCESTOR_MESSAGE: &str = "Given branch is an ancestor of the current branch.";
const FAST_FORWARD_MESSAGE: &str = "Current branch fast-forwarded.";
const CONFLICT_MESSAGE: &str = "Encountered a merge conflict.";

impl Repository {
    /// Merge a branch into the active branch and report what happened
    pub fn merge(&mut self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        let outcome = self.merge_branch(branch_name)?;

        match &outcome {
            MergeOutcome::AlreadyUpToDate => writeln!(self.writer(), "{ANCESTOR_MESSAGE}")?,
            MergeOutcome::FastForwarded { .. } => {
                writeln!(self.writer(), "{FAST_FORWARD_MESSAGE}")?
            }
            MergeOutcome::Merged { .. } if outcome.has_conflicts() => {
                writeln!(self.writer(), "{CONFLICT_MESSAGE}")?
            }
            MergeOutcome::Merged { .. } => {}
        }

        Ok(outcome)
    }

    /// Three-way merge of `branch_name` into the active branch
    ///
    /// Every precondition is checked before the working tree or the state is
    /// touched. Conflicts do not abort the merge: conflicted files are written
    /// with markers, staged, and committed like any other change.
    pub fn merge_branch(&mut self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        if !self.index().is_empty() {
            return Err(RepositoryError::UncommittedChanges.into());
        }
        let branch_oid = self
            .refs()
            .read_ref(branch_name)
            .ok_or(RepositoryError::UnknownBranch)?
            .clone();
        if self.refs().is_current_branch(branch_name) {
            return Err(RepositoryError::SelfMerge.into());
        }

        let head_oid = self.refs().read_head()?.clone();
        let split_oid = {
            let database = self.database();
            SplitPointFinder::new(|oid| Ok(database.load_commit(oid)?.parent().cloned()))
                .find_split_point(&head_oid, &branch_oid)?
                .with_context(|| format!("{head_oid} and {branch_oid} share no history"))?
        };

        if split_oid == branch_oid {
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        let branch = self.database().load_commit(&branch_oid)?;
        if split_oid == head_oid {
            self.sync_working_tree(&branch)?;
            self.index_mut().clear();
            self.refs_mut().update_head(branch_oid.clone());

            return Ok(MergeOutcome::FastForwarded { head: branch_oid });
        }

        self.check_untracked_files()?;

        let head = self.database().load_commit(&head_oid)?;
        let split = self.database().load_commit(&split_oid)?;
        let plan = MergePlan::new(split.files(), head.files(), branch.files());

        for (name, resolution) in plan.actions() {
            match resolution {
                Resolution::KeepHead => {}
                Resolution::TakeBranch(oid) => {
                    let blob = self.database().load_blob(oid)?;
                    self.workspace().write_file(name, blob.content())?;
                    self.index_mut().stage(name, oid.clone());
                }
                Resolution::Remove => {
                    self.workspace().remove_file(name)?;
                    self.index_mut().mark_removed(name);
                }
                Resolution::Conflict {
                    head: ours,
                    branch: theirs,
                } => {
                    let ours = self.load_blob_content(ours.as_ref())?;
                    let theirs = self.load_blob_content(theirs.as_ref())?;
                    let content = conflict_markers(ours.as_deref(), theirs.as_deref());

                    self.workspace().write_file(name, &content)?;
                    self.add(name)?;
                    tracing::debug!(file = %name, "wrote conflict markers");
                }
                Resolution::Blocked { by } => {
                    tracing::debug!(file = %name, %by, "kept head layout");
                }
            }
        }

        let message = format!("Merged {branch_name} into {}.", self.refs().current_branch());
        let commit = self.write_commit(&head, vec![head_oid, branch_oid], message)?;

        Ok(MergeOutcome::Merged {
            commit: commit.object_id().clone(),
            conflicts: plan.conflicts(),
        })
    }

    fn load_blob_content(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        oid.map(|oid| {
            self.database()
                .load_blob(oid)
                .map(|blob| blob.content().clone())
        })
        .transpose()
    }
}
