use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use colored::Colorize;
use std::collections::{BTreeMap, BTreeSet};

/// Snapshot of branches, staging area and working tree differences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    current_branch: String,
    branches: Vec<String>,
    staged: Vec<String>,
    removed: Vec<String>,
    modified: BTreeMap<String, WorkspaceChangeType>,
    untracked: BTreeSet<String>,
}

impl StatusReport {
    /// Build the report
    ///
    /// `working` maps each working file to the id it would get if added.
    pub fn new(refs: &Refs, head_files: &FileMap, index: &Index, working: &FileMap) -> Self {
        let branches = refs
            .list_branches()
            .map(|(name, _)| name.to_string())
            .collect();

        let mut modified = BTreeMap::new();
        for name in head_files.keys().chain(index.additions().keys()) {
            let expected = match index.staged(name) {
                Some(staged) => staged,
                None if index.is_removed(name) => continue,
                None => &head_files[name],
            };

            match working.get(name) {
                None => {
                    modified.insert(name.clone(), WorkspaceChangeType::Deleted);
                }
                Some(actual) if actual != expected => {
                    modified.insert(name.clone(), WorkspaceChangeType::Modified);
                }
                Some(_) => {}
            }
        }

        let untracked = working
            .keys()
            .filter(|name| {
                index.is_removed(name) || (!index.is_staged(name) && !head_files.contains_key(*name))
            })
            .cloned()
            .collect();

        StatusReport {
            current_branch: refs.current_branch().to_string(),
            branches,
            staged: index.additions().keys().cloned().collect(),
            removed: index.removals().iter().cloned().collect(),
            modified,
            untracked,
        }
    }

    pub fn modified(&self) -> &BTreeMap<String, WorkspaceChangeType> {
        &self.modified
    }

    pub fn untracked(&self) -> &BTreeSet<String> {
        &self.untracked
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for branch in &self.branches {
            if branch == &self.current_branch {
                writeln!(f, "{}", format!("*{branch}").green())?;
            } else {
                writeln!(f, "{branch}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for name in &self.staged {
            writeln!(f, "{name}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for name in &self.removed {
            writeln!(f, "{name}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (name, change) in &self.modified {
            writeln!(f, "{name} ({change})")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for name in &self.untracked {
            writeln!(f, "{name}")?;
        }
        writeln!(f)
    }
}
