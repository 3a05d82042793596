use crate::areas::publisher::Publisher;
use crate::areas::staging::STAGING_DIR_NAME;
use crate::artifacts::changeset::ChangeSet;
use crate::artifacts::chart::StagedFile;
use crate::artifacts::index;
use crate::artifacts::index::{INDEX_FILE_NAME, RawContentUrl};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

// The pipeline runs strictly forward: list changes, stage them, update the
// index, publish. The first failure aborts the run; files relocated before
// the failure point stay relocated (no rollback).
impl Publisher {
    pub fn publish(&self, commit: &str, branch: &str, owner: &str) -> anyhow::Result<()> {
        let changes = self.workspace().changed_files(commit)?;
        let staged = self.stage(&changes)?;

        let index = self.update_index(&staged, branch, owner)?;
        self.publish_staged(&staged, index.as_deref())?;

        Ok(())
    }

    /// Relocate every changed file into the staging area by base name,
    /// returning the staged descriptors the later stages consume. The staging
    /// directory is a side-effect sink only; no stage re-scans it to recover
    /// what was relocated.
    fn stage(&self, changes: &ChangeSet) -> anyhow::Result<Vec<StagedFile>> {
        self.staging().ensure_exists()?;

        let mut staged = Vec::with_capacity(changes.len());

        for file_path in changes.iter() {
            writeln!(self.writer(), "file: {}", file_path.display())?;

            if !self.workspace().is_regular_file(file_path) {
                anyhow::bail!(
                    "File '{}' does not exist or is not a regular file",
                    file_path.display()
                );
            }

            let name = file_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .with_context(|| format!("File '{}' has no base name", file_path.display()))?;

            let destination = self.staging().staged_path(&name);
            self.workspace().relocate(file_path, &destination)?;
            writeln!(
                self.writer(),
                "Moved {} to {}",
                file_path.display(),
                STAGING_DIR_NAME
            )?;

            staged.push(StagedFile::new(
                name,
                self.workspace().absolute_path(file_path),
                destination,
            ));
        }

        Ok(staged)
    }

    /// Run the index-generation collaborator against the staging area when at
    /// least one staged file is a chart archive, merging with the
    /// destination's existing index. Skipped with a warning otherwise.
    ///
    /// Returns the path of the freshly generated index, so the publishing
    /// stage never mistakes an index left over from an earlier run for one
    /// produced by this run.
    fn update_index(
        &self,
        staged: &[StagedFile],
        branch: &str,
        owner: &str,
    ) -> anyhow::Result<Option<PathBuf>> {
        if !staged.iter().any(StagedFile::is_chart_archive) {
            self.warn(&format!(
                "No .tgz files found in {STAGING_DIR_NAME}. Skipping index generation."
            ))?;
            return Ok(None);
        }

        writeln!(self.writer(), "Generating/updating Helm {INDEX_FILE_NAME}...")?;

        let url = RawContentUrl::new(owner.to_owned(), branch.to_owned());
        index::generate(self.staging().path(), &self.store().index_path(), &url)?;

        writeln!(
            self.writer(),
            "{INDEX_FILE_NAME} generated/updated successfully."
        )?;

        Ok(Some(self.staging().index_path()))
    }

    /// Copy every staged file into the destination's package subdirectory,
    /// except the index file, which goes to the destination root instead.
    /// Copies are non-destructive to the staging area.
    fn publish_staged(&self, staged: &[StagedFile], index: Option<&Path>) -> anyhow::Result<()> {
        if self.store().ensure_package_dir()? {
            writeln!(
                self.writer(),
                "Directory {} created.",
                self.store().package_dir().display()
            )?;
        }

        writeln!(self.writer(), "Copying files...")?;

        for file in staged.iter().filter(|file| file.name != INDEX_FILE_NAME) {
            self.store().receive_file(file)?;
            writeln!(
                self.writer(),
                "Copied {} to {}",
                file.name,
                self.store().package_dir().display()
            )?;
        }

        match index {
            Some(index_path) if index_path.is_file() => {
                self.store().receive_index(index_path)?;
                writeln!(
                    self.writer(),
                    "Copied {INDEX_FILE_NAME} to the destination directory."
                )?;
            }
            _ => {
                self.warn(&format!(
                    "No {INDEX_FILE_NAME} file found in {STAGING_DIR_NAME}."
                ))?;
            }
        }

        Ok(())
    }
}
