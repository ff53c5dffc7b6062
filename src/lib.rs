//! twig: a small local version-control engine
//!
//! Snapshots are content-addressed blobs and commits kept under `.twig`,
//! branches are named pointers into the commit graph, and merges are
//! three-way merges against the split point of two branches.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod telemetry;
