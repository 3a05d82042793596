//! Pipeline data structures
//!
//! This module contains the values passed between the pipeline stages:
//!
//! - `changeset`: Paths modified by the commit, parsed from the diff output
//! - `chart`: Archive naming rules and staged file descriptors
//! - `index`: Repository index naming, raw-content URLs and index generation

pub mod changeset;
pub mod chart;
pub mod index;
