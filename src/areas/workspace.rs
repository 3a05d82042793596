use crate::artifacts::changeset::ChangeSet;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Subdirectory of the workspace the packaging step writes chart archives to.
/// Only changes under this directory are considered for publishing.
pub const CHART_SOURCE_DIR: &str = "app";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Files the commit modified under the chart source directory, relative
    // to its parent commit. The child process gets the workspace as its
    // working directory; our own working directory is never touched.
    pub fn changed_files(&self, commit: &str) -> anyhow::Result<ChangeSet> {
        let output = Command::new("git")
            .current_dir(&self.path)
            .args(["diff-tree", "--no-commit-id", "--name-only", "-r"])
            .arg(commit)
            .args(["--", CHART_SOURCE_DIR])
            .output()
            .context("Failed to run git diff-tree")?;

        if !output.status.success() {
            anyhow::bail!(
                "git diff-tree failed with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let raw = String::from_utf8(output.stdout)
            .context("git diff-tree produced non-UTF-8 output")?;

        Ok(ChangeSet::parse(&raw))
    }

    pub fn is_regular_file(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn absolute_path(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    // rename, not copy: the original must disappear from the source tree
    pub fn relocate(&self, file_path: &Path, destination: &Path) -> anyhow::Result<()> {
        std::fs::rename(self.path.join(file_path), destination)
            .with_context(|| format!("Failed to move '{}'", file_path.display()))
    }
}
