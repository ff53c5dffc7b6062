use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// A content-addressed value record
///
/// Identifiers are derived from the object's logical fields, not from its
/// serialized bytes, so each object computes its own id once at construction.
pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn object_id(&self) -> &ObjectId;

    fn object_path(&self) -> PathBuf {
        PathBuf::from(self.object_type().store_dir()).join(self.object_id().to_path())
    }
}

/// Prefix a serialized body with the `<type> <size>\0` header
pub(crate) fn with_header(object_type: ObjectType, body: &[u8]) -> Result<Bytes> {
    let mut object_bytes = Vec::with_capacity(body.len() + 16);
    let header = format!("{} {}\0", object_type.as_str(), body.len());
    object_bytes.write_all(header.as_bytes())?;
    object_bytes.write_all(body)?;

    Ok(Bytes::from(object_bytes))
}
