//! Filesystem areas the pipeline operates on
//!
//! This module contains the places files live during a publishing run:
//!
//! - `workspace`: Source working tree and its version-control history
//! - `staging`: Staging directory the changed files are assembled in
//! - `store`: Destination tree the archives and index are published into
//! - `publisher`: High-level coordination of the areas

pub mod publisher;
pub mod staging;
pub mod store;
pub mod workspace;
