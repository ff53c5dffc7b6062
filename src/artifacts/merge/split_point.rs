//! Split point search
//!
//! The split point of two commits is the latest commit they share. Only first
//! parents are followed on either side: the search takes the first-parent
//! chain of one commit and returns its first entry that also lies on the
//! first-parent chain of the other. History reachable only through the second
//! parent of a merge commit is never considered, so after criss-cross merges
//! the result can be older than the best common ancestor.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Finds split points over any commit storage
///
/// `ParentLoaderFn` returns the first parent of a commit, `None` for the root.
pub struct SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    parent_loader: ParentLoaderFn,
}

impl<ParentLoaderFn> SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    pub fn new(parent_loader: ParentLoaderFn) -> Self {
        Self { parent_loader }
    }

    /// Ids from `start` back to the root, following first parents
    pub fn first_parent_chain(&self, start: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let mut chain = vec![start.clone()];
        let mut seen = HashSet::from([start.clone()]);
        let mut current = start.clone();

        while let Some(parent) = (self.parent_loader)(&current)? {
            if !seen.insert(parent.clone()) {
                anyhow::bail!("commit history contains a cycle at {parent}");
            }
            chain.push(parent.clone());
            current = parent;
        }

        Ok(chain)
    }

    /// First commit on `source`'s chain that also lies on `target`'s chain
    ///
    /// `None` only when the two commits do not share a root.
    pub fn find_split_point(
        &self,
        source: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let target_chain = self
            .first_parent_chain(target)?
            .into_iter()
            .collect::<HashSet<_>>();

        let split_point = self
            .first_parent_chain(source)?
            .into_iter()
            .find(|oid| target_chain.contains(oid));

        tracing::debug!(
            source = %source,
            target = %target,
            split_point = ?split_point.as_ref().map(ObjectId::to_short_oid),
            "found split point"
        );

        Ok(split_point)
    }
}
