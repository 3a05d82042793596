use crate::areas::staging::StagingArea;
use crate::areas::store::ChartStore;
use crate::areas::workspace::Workspace;
use colored::Colorize;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// Coordinates the areas a publishing run touches: the source workspace the
/// build ran in, the staging directory under it, and the destination store.
pub struct Publisher {
    workspace: Workspace,
    staging: StagingArea,
    store: ChartStore,
    writer: RefCell<Box<dyn Write>>,
}

impl Publisher {
    pub fn new(
        source_dir: &Path,
        destination_dir: &Path,
        writer: Box<dyn Write>,
    ) -> anyhow::Result<Self> {
        let source_dir = source_dir.canonicalize()?;

        if !destination_dir.exists() {
            std::fs::create_dir_all(destination_dir)?;
        }
        let destination_dir = destination_dir.canonicalize()?;

        let staging = StagingArea::under(&source_dir);
        let workspace = Workspace::new(source_dir.into_boxed_path());
        let store = ChartStore::new(destination_dir.into_boxed_path());

        Ok(Publisher {
            workspace,
            staging,
            store,
            writer: RefCell::new(writer),
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub fn store(&self) -> &ChartStore {
        &self.store
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        writeln!(self.writer(), "{} {}", "warning:".yellow().bold(), message)
    }
}
