use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::errors::RepositoryError;

impl Repository {
    /// Stage the current content of a working file
    ///
    /// A file whose content matches the head commit is not staged, and any
    /// stale staged entry for it is dropped. Adding always cancels a pending
    /// removal of the file.
    pub fn add(&mut self, name: &str) -> anyhow::Result<()> {
        let name = Workspace::normalize(name).ok_or(RepositoryError::FileNotFound)?;
        let blob = self
            .workspace()
            .parse_blob(&name)?
            .ok_or(RepositoryError::FileNotFound)?;

        let head = self.head_commit()?;
        self.index_mut().discard_conflicts(&name, head.files());

        if head.file(&name) == Some(blob.object_id()) {
            tracing::debug!(file = %name, "content matches head, nothing to stage");
            let index = self.index_mut();
            index.unstage(&name);
            index.unmark_removed(&name);

            return Ok(());
        }

        self.database().store(&blob)?;
        self.index_mut().stage(&name, blob.object_id().clone());
        tracing::debug!(file = %name, oid = %blob.object_id(), "staged file");

        Ok(())
    }
}
