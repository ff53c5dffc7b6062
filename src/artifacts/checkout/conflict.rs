use crate::areas::index::Index;
use crate::artifacts::objects::commit::FileMap;
use crate::errors::RepositoryError;
use std::collections::BTreeSet;

/// Untracked working files that a checkout, reset or merge would clobber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntrackedConflict {
    paths: BTreeSet<String>,
}

impl UntrackedConflict {
    /// Collect every working file that is neither tracked by head nor staged
    ///
    /// Succeeds only when there is none. The whole working tree is checked
    /// before anything is reported, so callers can validate before mutating.
    pub fn check(
        working_files: &BTreeSet<String>,
        head_files: &FileMap,
        index: &Index,
    ) -> Result<(), UntrackedConflict> {
        let paths = working_files
            .iter()
            .filter(|name| !head_files.contains_key(*name) && !index.is_staged(name))
            .cloned()
            .collect::<BTreeSet<_>>();

        if paths.is_empty() {
            Ok(())
        } else {
            Err(UntrackedConflict { paths })
        }
    }

    pub fn paths(&self) -> &BTreeSet<String> {
        &self.paths
    }
}

impl From<UntrackedConflict> for RepositoryError {
    fn from(conflict: UntrackedConflict) -> Self {
        tracing::debug!(paths = ?conflict.paths, "untracked files in the way");
        RepositoryError::UntrackedFileInTheWay
    }
}
