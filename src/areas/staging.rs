use crate::artifacts::index::INDEX_FILE_NAME;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Name of the staging directory, created under the source directory.
pub const STAGING_DIR_NAME: &str = "aux_dir";

/// Staging directory owned exclusively by the current run. Changed files are
/// relocated here by base name before indexing and publishing. Its contents
/// are intentionally left in place after the run as a debugging artifact.
#[derive(Debug)]
pub struct StagingArea {
    path: Box<Path>,
}

impl StagingArea {
    pub fn under(source_dir: &Path) -> Self {
        StagingArea {
            path: source_dir.join(STAGING_DIR_NAME).into_boxed_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the staging directory if it is not there yet. Succeeds when it
    /// already exists.
    pub fn ensure_exists(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))
    }

    /// Where a file with the given base name lives inside the staging area.
    pub fn staged_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Where the index-generation collaborator writes the index file.
    pub fn index_path(&self) -> PathBuf {
        self.path.join(INDEX_FILE_NAME)
    }
}
