use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Print the ids of all commits with exactly the given message
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let mut matches = Vec::new();

        for oid in self.database().list_commits()? {
            let commit = self.database().load_commit(&oid)?;
            if commit.message() == message {
                matches.push(commit.object_id().clone());
            }
        }

        if matches.is_empty() {
            return Err(RepositoryError::NoCommitWithMessage.into());
        }

        matches.sort();
        let mut writer = self.writer();
        for oid in matches {
            writeln!(writer, "{oid}")?;
        }

        Ok(())
    }
}
