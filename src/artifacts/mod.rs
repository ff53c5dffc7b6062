//! Version-control data structures and algorithms
//!
//! - `branch`: Branch names
//! - `checkout`: Working tree migrations and the untracked-file guard
//! - `core`: Shared utilities (pager wrapper)
//! - `log`: First-parent history traversal
//! - `merge`: Split point search and three-way resolution
//! - `objects`: Blob and commit objects
//! - `status`: Working tree status report

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
