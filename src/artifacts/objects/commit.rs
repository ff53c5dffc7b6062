//! Commit object
//!
//! Commits are immutable snapshots of every tracked file. They contain:
//! - Parent commit ID(s) (none for the root, two for merge commits)
//! - The full filename to blob mapping (not a diff against the parent)
//! - A timestamp
//! - A commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! timestamp <rfc3339>
//! parent <parent-sha>
//! file <blob-sha> <filename>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, with_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Message of the commit every repository starts from
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Timestamp rendering used for hashing and for log output
pub const TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// Tracked files of a commit, keyed by filename
pub type FileMap = BTreeMap<String, ObjectId>;

/// Directories enclosing a tracked filename, innermost first
///
/// `"a/b/c.txt"` yields `"a/b"` then `"a"`.
pub fn parent_names(name: &str) -> impl Iterator<Item = &str> {
    name.rmatch_indices('/').map(move |(index, _)| &name[..index])
}

/// Commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    message: String,
    /// Parent commit IDs (empty for the root, two for merge commits)
    parents: Vec<ObjectId>,
    /// Full snapshot of tracked files
    files: FileMap,
    timestamp: DateTime<FixedOffset>,
    oid: ObjectId,
}

impl Commit {
    pub fn new(
        message: String,
        parents: Vec<ObjectId>,
        files: FileMap,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        let oid = Self::hash(&message, &files, &timestamp, &parents);

        Commit {
            message,
            parents,
            files,
            timestamp,
            oid,
        }
    }

    /// The root commit: no parents, no files, epoch timestamp
    ///
    /// Its id is the same in every repository.
    pub fn root() -> Self {
        let epoch = DateTime::UNIX_EPOCH.fixed_offset();

        Self::new(
            ROOT_COMMIT_MESSAGE.to_string(),
            Vec::new(),
            FileMap::new(),
            epoch,
        )
    }

    /// Commit id over message, file mapping, timestamp and parents
    ///
    /// The mapping is rendered in key order, so the digest does not depend on
    /// how the mapping was built.
    pub fn hash(
        message: &str,
        files: &FileMap,
        timestamp: &DateTime<FixedOffset>,
        parents: &[ObjectId],
    ) -> ObjectId {
        let files = format!(
            "{{{}}}",
            files
                .iter()
                .map(|(name, oid)| format!("{name}={oid}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
        let timestamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let parents = format!(
            "[{}]",
            parents
                .iter()
                .map(ObjectId::as_ref)
                .collect::<Vec<_>>()
                .join(", ")
        );

        ObjectId::digest([
            message.as_bytes(),
            files.as_bytes(),
            timestamp.as_bytes(),
            parents.as_bytes(),
        ])
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    /// Blob tracked under `name`, if any
    pub fn file(&self, name: &str) -> Option<&ObjectId> {
        self.files.get(name)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!("timestamp {}", self.timestamp.to_rfc3339()));
        for parent in &self.parents {
            object_content.push(format!("parent {parent}"));
        }
        for (name, oid) in &self.files {
            object_content.push(format!("file {oid} {name}"));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        with_header(self.object_type(), object_content.join("\n").as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: content is not UTF-8")?;

        let (headers, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;
        let mut lines = headers.lines();

        let timestamp = lines
            .next()
            .and_then(|line| line.strip_prefix("timestamp "))
            .context("Invalid commit object: missing timestamp line")?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp)
            .context("Invalid commit object: malformed timestamp")?;

        let mut parents = Vec::new();
        let mut files = FileMap::new();
        for line in lines {
            if let Some(parent) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(parent.to_string())?);
            } else if let Some(entry) = line.strip_prefix("file ") {
                let (oid, name) = entry
                    .split_once(' ')
                    .context("Invalid commit object: malformed file line")?;
                files.insert(name.to_string(), ObjectId::try_parse(oid.to_string())?);
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        Ok(Self::new(message.to_string(), parents, files, timestamp))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }
}
