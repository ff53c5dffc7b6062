//! Working tree status
//!
//! - `file_change`: how a working file differs from what the next commit holds
//! - `status_info`: the full report rendered by the status command

pub mod file_change;
pub mod status_info;
