//! Object store
//!
//! Blobs and commits are written once under their id and never change. Each
//! object type has its own fan-out directory below `.twig/objects`, which lets
//! commit enumeration and abbreviated-id lookup skip every blob.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Persist an object under its id
    ///
    /// Storing an object that already exists is a no-op.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<()> {
        let object_path = self.path.join(object.object_path());

        if object_path.exists() {
            tracing::trace!(oid = %object.object_id(), "object already stored");
            return Ok(());
        }

        let object_dir = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).with_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;

        self.write_object(&object_path, object.serialize()?)?;
        tracing::debug!(
            oid = %object.object_id(),
            kind = %object.object_type(),
            "stored object"
        );

        Ok(())
    }

    pub fn contains_commit(&self, oid: &ObjectId) -> bool {
        self.object_path(ObjectType::Commit, oid).exists()
    }

    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<Blob> {
        let reader = self.parse_object_as_bytes(ObjectType::Blob, oid)?;
        let blob = Blob::deserialize(reader)
            .with_context(|| format!("Unable to parse blob object {oid}"))?;

        Self::verify(&blob, oid)?;
        Ok(blob)
    }

    /// Load a commit, failing with `CommitNotFound` when it was never stored
    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        if !self.contains_commit(oid) {
            return Err(RepositoryError::CommitNotFound.into());
        }

        let reader = self.parse_object_as_bytes(ObjectType::Commit, oid)?;
        let commit = Commit::deserialize(reader)
            .with_context(|| format!("Unable to parse commit object {oid}"))?;

        Self::verify(&commit, oid)?;
        Ok(commit)
    }

    /// Ids of every persisted commit
    pub fn list_commits(&self) -> anyhow::Result<Vec<ObjectId>> {
        self.find_commits_by_prefix("")
    }

    /// Resolve a full or abbreviated commit id
    ///
    /// A prefix resolves only when exactly one stored commit starts with it.
    /// Unknown and ambiguous prefixes are both `CommitNotFound`.
    pub fn resolve_commit(&self, id: &str) -> anyhow::Result<ObjectId> {
        let prefix = id.to_ascii_lowercase();
        if prefix.is_empty() {
            return Err(RepositoryError::CommitNotFound.into());
        }

        let mut matches = self.find_commits_by_prefix(&prefix)?;
        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(RepositoryError::CommitNotFound.into()),
            candidates => {
                tracing::warn!(prefix = %prefix, candidates, "ambiguous commit id prefix");
                Err(RepositoryError::CommitNotFound.into())
            }
        }
    }

    /// Find all commits whose id starts with the given prefix
    ///
    /// For prefixes of 2+ characters only the matching fan-out directory is
    /// read. Shorter prefixes scan every directory.
    pub fn find_commits_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let commits_path = self.path.join(ObjectType::Commit.store_dir());
        if !commits_path.is_dir() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Vec::new());
        }

        let dirs = if prefix.len() >= 2 {
            vec![commits_path.join(&prefix[..2])]
        } else {
            std::fs::read_dir(&commits_path)
                .with_context(|| format!("Unable to list {}", commits_path.display()))?
                .map(|entry| entry.map(|entry| entry.path()))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut matches = Vec::new();
        for dir in dirs.into_iter().filter(|dir| dir.is_dir()) {
            let Some(dir_name) = dir.file_name().map(|name| name.to_string_lossy().into_owned())
            else {
                continue;
            };

            for entry in std::fs::read_dir(&dir)
                .with_context(|| format!("Unable to list {}", dir.display()))?
            {
                let full_oid = format!("{dir_name}{}", entry?.file_name().to_string_lossy());

                if full_oid.starts_with(prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn object_path(&self, object_type: ObjectType, oid: &ObjectId) -> PathBuf {
        self.path.join(object_type.store_dir()).join(oid.to_path())
    }

    fn parse_object_as_bytes(
        &self,
        expected: ObjectType,
        oid: &ObjectId,
    ) -> anyhow::Result<impl BufRead> {
        let object_content = self.read_object(&self.object_path(expected, oid))?;
        let content_length = object_content.len();
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::read_header(&mut object_reader)
            .with_context(|| format!("Unable to parse header of object {oid}"))?;
        if object_type != expected {
            anyhow::bail!("Object {oid} is a {object_type}, expected a {expected}");
        }
        let body_length = content_length - object_reader.position() as usize;
        if body_length != size {
            anyhow::bail!("Object {oid} announces {size} bytes but holds {body_length}");
        }

        Ok(object_reader)
    }

    fn verify(object: &impl Object, oid: &ObjectId) -> anyhow::Result<()> {
        if object.object_id() != oid {
            anyhow::bail!(
                "Corrupted object {oid}: content hashes to {}",
                object.object_id()
            );
        }

        Ok(())
    }

    fn read_object(&self, object_path: &Path) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(object_path)
            .with_context(|| format!("Unable to read object file {}", object_path.display()))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: &Path, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;

        let object_content = Self::compress(object_content)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(object_dir).with_context(|| {
            format!("Unable to create temp object in {}", object_dir.display())
        })?;
        temp_file.write_all(&object_content).with_context(|| {
            format!("Unable to write object file {}", temp_file.path().display())
        })?;

        // rename the temp file to the object file to make it atomic
        temp_file.persist(object_path).with_context(|| {
            format!("Unable to rename object file to {}", object_path.display())
        })?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
