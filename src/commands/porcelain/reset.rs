use crate::areas::repository::Repository;

impl Repository {
    /// Move the active branch to any commit and check out its snapshot
    ///
    /// Both the staged additions and the pending removals are discarded.
    pub fn reset(&mut self, commit_id: &str) -> anyhow::Result<()> {
        let target_oid = self.database().resolve_commit(commit_id)?;
        let target = self.database().load_commit(&target_oid)?;

        self.sync_working_tree(&target)?;
        self.refs_mut().update_head(target_oid);
        self.index_mut().clear();

        Ok(())
    }
}
