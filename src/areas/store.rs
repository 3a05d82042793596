use crate::artifacts::chart::StagedFile;
use crate::artifacts::index::INDEX_FILE_NAME;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Subdirectory of the destination the archives are published into.
pub const PACKAGE_DIR_NAME: &str = "helm";

/// The persistent destination tree. Archives accumulate in the package
/// subdirectory across runs (overwritten on name collision, never purged);
/// the index file at the root is overwritten each run.
#[derive(Debug)]
pub struct ChartStore {
    path: Box<Path>,
}

impl ChartStore {
    pub fn new(path: Box<Path>) -> Self {
        ChartStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn package_dir(&self) -> PathBuf {
        self.path.join(PACKAGE_DIR_NAME)
    }

    pub fn index_path(&self) -> PathBuf {
        self.path.join(INDEX_FILE_NAME)
    }

    // Returns whether the package subdirectory had to be created.
    pub fn ensure_package_dir(&self) -> anyhow::Result<bool> {
        let package_dir = self.package_dir();
        if package_dir.is_dir() {
            return Ok(false);
        }

        std::fs::create_dir_all(&package_dir)
            .with_context(|| format!("Failed to create {}", package_dir.display()))?;

        Ok(true)
    }

    // Copies by base name, overwriting a previously published file with the
    // same name. The staged original is left in place.
    pub fn receive_file(&self, staged: &StagedFile) -> anyhow::Result<PathBuf> {
        let destination = self.package_dir().join(&staged.name);
        std::fs::copy(&staged.path, &destination)
            .with_context(|| format!("Failed to copy '{}' to {}", staged.name, self.package_dir().display()))?;

        Ok(destination)
    }

    pub fn receive_index(&self, index_path: &Path) -> anyhow::Result<()> {
        std::fs::copy(index_path, self.index_path())
            .with_context(|| format!("Failed to copy {} to {}", INDEX_FILE_NAME, self.path.display()))?;

        Ok(())
    }
}
