//! Porcelain commands
//!
//! Each command is an `impl Repository` block working on the repository state
//! loaded for the current invocation. Commands only mutate that in-memory
//! state; the binary persists it once the command has succeeded.
//!
//! ## Commands
//!
//! - `init`: Create a repository holding the root commit
//! - `add` / `rm`: Stage a file, or stop tracking it
//! - `commit`: Record the staged snapshot
//! - `log` / `global_log` / `find`: Inspect history
//! - `status`: Show branches, staged changes and working tree differences
//! - `checkout`: Switch branches or restore single files
//! - `branch` / `rm_branch`: Manage branch pointers
//! - `reset`: Move the active branch to any commit
//! - `merge`: Three-way merge of another branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod global_log;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod rm_branch;
pub mod status;
