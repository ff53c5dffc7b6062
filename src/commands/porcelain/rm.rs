use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::errors::RepositoryError;

impl Repository {
    /// Unstage a file, and stop tracking it if the head commit tracks it
    ///
    /// A tracked file is also deleted from the working tree.
    pub fn rm(&mut self, name: &str) -> anyhow::Result<()> {
        let name = Workspace::normalize(name).ok_or(RepositoryError::FileNotFound)?;

        let tracked = self.head_commit()?.file(&name).is_some();
        let staged = self.index().is_staged(&name);

        if !tracked && !staged {
            return if self.workspace().exists(&name) {
                Err(RepositoryError::NoReasonToRemove.into())
            } else {
                Err(RepositoryError::FileNotFound.into())
            };
        }

        if staged {
            self.index_mut().unstage(&name);
        }
        if tracked {
            self.workspace().remove_file(&name)?;
            self.index_mut().mark_removed(&name);
        }

        Ok(())
    }
}
