//! Working tree access
//!
//! Files are addressed by their path relative to the repository root, always
//! using `/` separators. The `.twig` directory is never listed, read, written
//! or deleted through the workspace.

use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Name of the repository metadata directory
pub const REPOSITORY_DIR: &str = ".twig";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalize a user-supplied filename
    ///
    /// Returns `None` for names that do not denote a trackable file inside
    /// the working tree: empty names, absolute paths, `..` components,
    /// anything below the metadata directory, and names holding control
    /// characters, which the line-based object formats cannot store.
    pub fn normalize(name: &str) -> Option<String> {
        let mut components = Vec::new();

        for component in Path::new(name).components() {
            match component {
                Component::Normal(part) => components.push(Self::trackable_part(part)?),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        match components.first() {
            None => None,
            Some(&first) if first == REPOSITORY_DIR => None,
            Some(_) => Some(components.join("/")),
        }
    }

    /// Every regular file in the working tree, in name order
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| entry.depth() != 1 || entry.file_name() != REPOSITORY_DIR);

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Unable to list working tree {}", self.path.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(name) = self.relative_name(entry.path()) {
                files.insert(name);
            }
        }

        Ok(files)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(name);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// Read a working file as a blob, `None` when the file does not exist
    pub fn parse_blob(&self, name: &str) -> anyhow::Result<Option<Blob>> {
        if !self.exists(name) {
            return Ok(None);
        }

        Ok(Some(Blob::new(name, self.read_file(name)?)))
    }

    /// Id the working file would have if it were added, `None` when absent
    pub fn hash_file(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        if !self.exists(name) {
            return Ok(None);
        }

        Ok(Some(Blob::hash(name, &self.read_file(name)?)))
    }

    /// Write a working file, creating parent directories as needed
    pub fn write_file(&self, name: &str, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        if let Some(parent) = file_path.parent() {
            self.make_directories(parent)?;
        }
        if file_path.is_dir() {
            std::fs::remove_dir_all(&file_path).with_context(|| {
                format!("Unable to remove directory {}", file_path.display())
            })?;
        }

        std::fs::write(&file_path, content)
            .with_context(|| format!("Unable to write file {}", file_path.display()))?;
        tracing::trace!(file = name, "wrote working file");

        Ok(())
    }

    /// Delete a working file if present and prune directories it leaves empty
    pub fn remove_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .with_context(|| format!("Unable to remove file {}", file_path.display()))?;
            tracing::trace!(file = name, "removed working file");
        }

        self.prune_empty_parents(&file_path)
    }

    // Deletions run first so a file can replace a directory it used to live in.
    pub fn apply_migration(
        &self,
        migration: &Migration,
        load_blob: impl Fn(&ObjectId) -> anyhow::Result<Blob>,
    ) -> anyhow::Result<()> {
        for name in migration.deletions() {
            self.remove_file(name)?;
        }

        for (name, oid) in migration.writes() {
            let blob = load_blob(oid)?;
            self.write_file(name, blob.content())?;
        }

        Ok(())
    }

    fn relative_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.path).ok()?;

        let parts = relative
            .components()
            .map(|component| Self::trackable_part(component.as_os_str()))
            .collect::<Option<Vec<_>>>()?;

        Some(parts.join("/"))
    }

    fn trackable_part(part: &std::ffi::OsStr) -> Option<&str> {
        part.to_str()
            .filter(|part| !part.chars().any(char::is_control))
    }

    fn make_directories(&self, dir_path: &Path) -> anyhow::Result<()> {
        // a file standing where a directory is needed gets replaced
        let mut current = PathBuf::from(&*self.path);
        if let Ok(relative) = dir_path.strip_prefix(&self.path) {
            for component in relative.components() {
                current.push(component);
                if current.is_file() {
                    std::fs::remove_file(&current).with_context(|| {
                        format!("Unable to remove file {}", current.display())
                    })?;
                }
            }
        }

        std::fs::create_dir_all(dir_path)
            .with_context(|| format!("Unable to create directory {}", dir_path.display()))
    }

    fn prune_empty_parents(&self, file_path: &Path) -> anyhow::Result<()> {
        for dir in file_path.ancestors().skip(1) {
            if dir == &*self.path || !dir.starts_with(&self.path) || !dir.is_dir() {
                break;
            }

            let is_empty = std::fs::read_dir(dir)
                .with_context(|| format!("Unable to list directory {}", dir.display()))?
                .next()
                .is_none();
            if !is_empty {
                break;
            }

            std::fs::remove_dir(dir)
                .with_context(|| format!("Unable to remove directory {}", dir.display()))?;
        }

        Ok(())
    }
}
