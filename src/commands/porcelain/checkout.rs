use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::checkout::conflict::UntrackedConflict;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use crate::errors::RepositoryError;

impl Repository {
    /// Switch to another branch, replacing the working tree with its snapshot
    pub fn checkout_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let target_oid = self
            .refs()
            .read_ref(branch_name)
            .ok_or(RepositoryError::NoSuchBranch)?
            .clone();
        if self.refs().is_current_branch(branch_name) {
            return Err(RepositoryError::CheckoutCurrentBranch.into());
        }

        let target = self.database().load_commit(&target_oid)?;
        self.sync_working_tree(&target)?;

        self.index_mut().clear();
        self.refs_mut().set_head(branch_name)?;
        tracing::debug!(branch = branch_name, head = %target_oid.to_short_oid(), "switched branch");

        Ok(())
    }

    /// Restore one file from the head commit; the staging area is left alone
    pub fn checkout_file(&mut self, name: &str) -> anyhow::Result<()> {
        let head = self.head_commit()?;

        self.restore_file(&head, name)
    }

    /// Restore one file from a commit given by a full or abbreviated id
    pub fn checkout_commit_file(&mut self, commit_id: &str, name: &str) -> anyhow::Result<()> {
        let oid = self.database().resolve_commit(commit_id)?;
        let commit = self.database().load_commit(&oid)?;

        self.restore_file(&commit, name)
    }

    fn restore_file(&self, commit: &Commit, name: &str) -> anyhow::Result<()> {
        let name = Workspace::normalize(name).ok_or(RepositoryError::FileNotInCommit)?;
        let oid = commit.file(&name).ok_or(RepositoryError::FileNotInCommit)?;

        let blob = self.database().load_blob(oid)?;
        self.workspace().write_file(&name, blob.content())
    }

    /// Fail with `UntrackedFileInTheWay` while any working file is neither
    /// tracked by head nor staged
    pub(crate) fn check_untracked_files(&self) -> anyhow::Result<()> {
        let working_files = self.workspace().list_files()?;
        let head = self.head_commit()?;

        UntrackedConflict::check(&working_files, head.files(), self.index())
            .map_err(RepositoryError::from)?;

        Ok(())
    }

    /// Replace the working tree with `target`'s snapshot
    ///
    /// The untracked-file check runs before any file is touched.
    pub(crate) fn sync_working_tree(&self, target: &Commit) -> anyhow::Result<()> {
        self.check_untracked_files()?;

        let working_files = self.workspace().list_files()?;
        let migration = Migration::plan(&working_files, target.files());
        let database = self.database();

        self.workspace()
            .apply_migration(&migration, |oid| database.load_blob(oid))
    }
}
