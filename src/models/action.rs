use std::path::{Path, PathBuf};

use super::font::QuarantineReason;

/// A planned change for one font file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Rename the file within its directory
    Rename { source: PathBuf, target: PathBuf },
    /// Park a file under a temporary free name to break a rename cycle
    Stage { source: PathBuf, target: PathBuf },
    /// The file already carries its resolved name
    Unchanged { path: PathBuf },
    /// Move the file into the failure directory
    Quarantine {
        source: PathBuf,
        target: PathBuf,
        reason: QuarantineReason,
    },
}

impl Action {
    pub fn source(&self) -> &Path {
        match self {
            Action::Rename { source, .. } => source,
            Action::Stage { source, .. } => source,
            Action::Unchanged { path } => path,
            Action::Quarantine { source, .. } => source,
        }
    }
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub renamed: usize,
    pub unchanged: usize,
    pub quarantined: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.renamed + self.unchanged + self.quarantined + self.failed
    }

    pub fn print_summary(&self) {
        println!("Font renaming summary:");
        println!("  - {} fonts processed", self.total());
        println!("  - {} renamed", self.renamed);
        println!("  - {} already named correctly", self.unchanged);
        println!("  - {} moved to failed_fonts", self.quarantined);
        if self.failed > 0 {
            println!("  - {} failed", self.failed);
        }
    }
}
