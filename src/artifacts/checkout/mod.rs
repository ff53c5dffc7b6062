//! Working tree synchronization
//!
//! Replacing the working tree with another commit's snapshot happens in two
//! steps that never interleave:
//!
//! 1. `conflict`: a validation pass that refuses to continue while an
//!    untracked file could be clobbered
//! 2. `migration`: a plan of deletions and writes, applied by the workspace
//!
//! Nothing is touched until the first step has passed.

pub mod conflict;
pub mod migration;
