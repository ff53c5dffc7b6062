//! Command implementations
//!
//! - `porcelain`: user-facing version control workflows (add, commit, merge, ...)

pub mod porcelain;
