use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        if message.trim().is_empty() {
            return Err(RepositoryError::EmptyCommitMessage.into());
        }
        if self.index().is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let head = self.head_commit()?;
        let parents = vec![head.object_id().clone()];
        let commit = self.write_commit(&head, parents, message.to_string())?;

        Ok(commit.object_id().clone())
    }

    /// Record head's snapshot with the staged changes applied, then advance
    /// the active branch and clear the staging area
    pub(crate) fn write_commit(
        &mut self,
        head: &Commit,
        parents: Vec<ObjectId>,
        message: String,
    ) -> anyhow::Result<Commit> {
        let files = self.index().apply_to(head.files());
        let commit = Commit::new(message, parents, files, self.config().now());

        self.database().store(&commit)?;
        self.refs_mut().update_head(commit.object_id().clone());
        self.index_mut().clear();

        tracing::debug!(
            oid = %commit.object_id(),
            branch = %self.refs().current_branch(),
            files = commit.files().len(),
            "created commit"
        );

        Ok(commit)
    }
}
