//! Conflict markers
//!
//! A conflicted file is replaced by both versions, head first:
//!
//! ```text
//! <<<<<<< HEAD
//! <head content>=======
//! <branch content>>>>>>>>
//! ```
//!
//! Contents are inserted verbatim, so a side without a trailing newline runs
//! straight into the next marker. A side where the file is absent
//! contributes nothing.

const HEAD_MARKER: &[u8] = b"<<<<<<< HEAD\n";
const SEPARATOR: &[u8] = b"=======\n";
const END_MARKER: &[u8] = b">>>>>>>\n";

pub fn conflict_markers(head: Option<&[u8]>, branch: Option<&[u8]>) -> Vec<u8> {
    let head = head.unwrap_or_default();
    let branch = branch.unwrap_or_default();

    let mut content = Vec::with_capacity(
        HEAD_MARKER.len() + head.len() + SEPARATOR.len() + branch.len() + END_MARKER.len(),
    );
    content.extend_from_slice(HEAD_MARKER);
    content.extend_from_slice(head);
    content.extend_from_slice(SEPARATOR);
    content.extend_from_slice(branch);
    content.extend_from_slice(END_MARKER);

    content
}
