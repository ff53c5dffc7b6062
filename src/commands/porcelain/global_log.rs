use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Show every commit ever made, newest first
    pub fn global_log(&self) -> anyhow::Result<()> {
        let mut commits = self
            .database()
            .list_commits()?
            .iter()
            .map(|oid| self.database().load_commit(oid))
            .collect::<anyhow::Result<Vec<_>>>()?;

        // ties on the timestamp fall back to id order
        commits.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| a.object_id().cmp(b.object_id()))
        });

        for commit in &commits {
            self.show_commit(commit)?;
        }

        Ok(())
    }
}
