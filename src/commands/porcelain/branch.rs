use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

impl Repository {
    /// Create a branch at the active branch's head without switching to it
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let head = self.refs().read_head()?.clone();

        tracing::debug!(branch = %branch_name, head = %head.to_short_oid(), "creating branch");
        self.refs_mut().create_branch(branch_name, head)
    }
}
