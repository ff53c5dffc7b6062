//! Persisted repository state
//!
//! The branch table and the staging area are the only mutable parts of a
//! repository. They are stored together as one JSON document, loaded once when
//! a command opens the repository and written back once when it succeeds.
//! Writes go through a temporary file that is renamed over the old snapshot.

use crate::areas::index::Index;
use crate::areas::refs::Refs;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryState {
    pub refs: Refs,
    pub index: Index,
}

impl RepositoryState {
    pub fn new(refs: Refs) -> Self {
        RepositoryState {
            refs,
            index: Index::default(),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read(path)
            .with_context(|| format!("Unable to read repository state {}", path.display()))?;

        serde_json::from_slice(&content)
            .with_context(|| format!("Corrupted repository state {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let dir = path
            .parent()
            .with_context(|| format!("Invalid state path {}", path.display()))?;
        let content =
            serde_json::to_vec_pretty(self).context("Unable to serialize repository state")?;

        let mut temp_file = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Unable to create temp file in {}", dir.display()))?;
        temp_file
            .write_all(&content)
            .context("Unable to write repository state")?;
        temp_file
            .persist(path)
            .with_context(|| format!("Unable to replace repository state {}", path.display()))?;

        tracing::debug!(path = %path.display(), "saved repository state");
        Ok(())
    }
}
