use crate::areas::repository::Repository;

impl Repository {
    /// Delete a branch pointer; its commits stay in the object store
    pub fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let head = self.refs_mut().delete_branch(branch_name)?;

        tracing::debug!(branch = branch_name, head = %head.to_short_oid(), "deleted branch");
        Ok(())
    }
}
