//! Blob object
//!
//! A blob is the snapshot of one working file at the moment it was staged.
//! Unlike git blobs, a blob remembers the name it was added under, and the
//! name is part of its identity: the same bytes under two names are two
//! different blobs.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<filename>\n<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, with_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::io::BufRead;

/// Snapshot of a single file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Working-tree-relative path the content was read from
    name: String,
    /// Raw file bytes
    content: Bytes,
    oid: ObjectId,
}

impl Blob {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let name = name.into();
        let content = content.into();
        let oid = Self::hash(&name, &content);

        Blob { name, content, oid }
    }

    /// Blob id for a filename and its content
    ///
    /// The digest covers the filename, the raw bytes, and the textual
    /// rendering of the bytes, in that order.
    pub fn hash(name: &str, content: &[u8]) -> ObjectId {
        let text = String::from_utf8_lossy(content);

        ObjectId::digest([name.as_bytes(), content, text.as_bytes()])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut body = Vec::with_capacity(self.name.len() + 1 + self.content.len());
        body.extend_from_slice(self.name.as_bytes());
        body.push(b'\n');
        body.extend_from_slice(&self.content);

        with_header(self.object_type(), &body)
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let mut name = Vec::new();
        reader
            .read_until(b'\n', &mut name)
            .context("Invalid blob object: missing name line")?;
        if name.pop() != Some(b'\n') {
            anyhow::bail!("Invalid blob object: unterminated name line");
        }
        let name = String::from_utf8(name).context("Invalid blob object: name is not UTF-8")?;

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(name, content))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }
}
