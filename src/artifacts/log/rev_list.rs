use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

/// First-parent history of a commit, newest first
///
/// Merge commits are followed through their first parent only, so the walk
/// stays on the branch the merge was made on. The commit loader decides where
/// commits come from; a loading error is yielded once and ends the walk.
pub struct RevList<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    commit_loader: CommitLoaderFn,
    current_commit_oid: Option<ObjectId>,
}

impl<CommitLoaderFn> RevList<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    pub fn new(commit_loader: CommitLoaderFn, start: ObjectId) -> Self {
        RevList {
            commit_loader,
            current_commit_oid: Some(start),
        }
    }
}

impl<CommitLoaderFn> Iterator for RevList<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match (self.commit_loader)(&commit_oid) {
            Ok(commit) => {
                // Move to the first parent for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(commit))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
