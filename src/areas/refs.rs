//! Branch table
//!
//! Branches are named pointers into the commit graph. The table maps every
//! branch name to the id of its head commit and records which branch is
//! active (HEAD). Unlike git there is no detached HEAD: HEAD always names a
//! branch that exists in the table.
//!
//! The table is part of the persisted repository state, so updates here are
//! only made durable when the repository saves its state.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    /// Active branch
    head: BranchName,
    /// Branch heads keyed by branch name
    branches: BTreeMap<BranchName, ObjectId>,
}

impl Refs {
    /// Create a table holding a single branch, which is also the active one
    pub fn new(head: BranchName, oid: ObjectId) -> Self {
        let branches = BTreeMap::from([(head.clone(), oid)]);

        Refs { head, branches }
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.head
    }

    pub fn is_current_branch(&self, name: &str) -> bool {
        self.head.as_ref() == name
    }

    /// Head commit of the active branch
    pub fn read_head(&self) -> anyhow::Result<&ObjectId> {
        self.branches
            .get(&self.head)
            .with_context(|| format!("active branch {} has no head commit", self.head))
    }

    /// Head commit of the named branch
    pub fn read_ref(&self, name: &str) -> Option<&ObjectId> {
        self.branches.get(name)
    }

    /// Create a branch pointing at `oid` without switching to it
    pub fn create_branch(&mut self, name: BranchName, oid: ObjectId) -> anyhow::Result<()> {
        if self.branches.contains_key(&name) {
            return Err(RepositoryError::BranchExists.into());
        }

        self.branches.insert(name, oid);
        Ok(())
    }

    /// Delete a branch pointer, leaving its commits in place
    pub fn delete_branch(&mut self, name: &str) -> anyhow::Result<ObjectId> {
        if !self.branches.contains_key(name) {
            return Err(RepositoryError::UnknownBranch.into());
        }
        if self.is_current_branch(name) {
            return Err(RepositoryError::RemoveCurrentBranch.into());
        }

        self.branches
            .remove(name)
            .ok_or_else(|| RepositoryError::UnknownBranch.into())
    }

    /// Move the active branch to `oid`
    pub fn update_head(&mut self, oid: ObjectId) {
        self.branches.insert(self.head.clone(), oid);
    }

    /// Make an existing branch the active one
    pub fn set_head(&mut self, name: &str) -> anyhow::Result<()> {
        let (name, _) = self
            .branches
            .get_key_value(name)
            .ok_or(RepositoryError::NoSuchBranch)?;

        self.head = name.clone();
        Ok(())
    }

    /// All branches in name order
    pub fn list_branches(&self) -> impl Iterator<Item = (&BranchName, &ObjectId)> {
        self.branches.iter()
    }
}
