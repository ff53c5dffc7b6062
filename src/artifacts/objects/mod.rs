//! Content-addressed object types
//!
//! Everything twig persists besides the mutable repository state is an object
//! identified by a SHA-1 hash of its logical fields. There are two types:
//!
//! - **Blob**: one file's name and content at the moment it was staged
//! - **Commit**: a full snapshot of tracked files with parents, timestamp and message
//!
//! All objects serialize to the `<type> <size>\0<content>` format before being
//! compressed into the object store.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
