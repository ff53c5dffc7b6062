//! Core repository components
//!
//! This module contains the stateful building blocks of a repository:
//!
//! - `database`: Object store for blobs and commits
//! - `index`: Staging area of pending additions and removals
//! - `refs`: Branch table and the active branch
//! - `state`: Persisted snapshot of the branch table and staging area
//! - `repository`: Repository handle tying the areas together
//! - `workspace`: Working tree file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod state;
pub mod workspace;
