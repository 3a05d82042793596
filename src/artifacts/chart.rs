use derive_new::new;
use std::path::PathBuf;

/// Suffix identifying a packaged chart archive.
pub const ARCHIVE_SUFFIX: &str = ".tgz";

pub fn is_chart_archive(name: &str) -> bool {
    name.ends_with(ARCHIVE_SUFFIX)
}

/// A changed file after relocation into the staging area.
///
/// Staged files are tracked by value so the later pipeline stages never have
/// to re-scan the staging directory to recover what was relocated.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StagedFile {
    /// Base name of the file, also its name inside the staging area.
    pub name: String,
    /// Absolute path the file was relocated from.
    pub origin: PathBuf,
    /// Absolute path of the file inside the staging area.
    pub path: PathBuf,
}

impl StagedFile {
    pub fn is_chart_archive(&self) -> bool {
        is_chart_archive(&self.name)
    }
}
