use std::path::{Path, PathBuf};

/// The relative paths modified by a single commit, as reported by the
/// version-control collaborator. Blank lines from the textual diff output are
/// filtered out at parse time, so an empty change set stays empty instead of
/// turning into a single phantom path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    paths: Vec<PathBuf>,
}

impl ChangeSet {
    pub fn parse(raw: &str) -> Self {
        let paths = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect();

        ChangeSet { paths }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}
