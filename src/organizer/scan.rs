use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{FontFile, FAILED_DIR_NAME};

/// What the target directory looked like when the run started
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    pub root: PathBuf,
    /// Names of every direct entry of `root`, files and directories alike
    pub entries: BTreeSet<OsString>,
    /// Names already present in the failure directory
    pub quarantined: BTreeSet<OsString>,
    /// Candidate font files, sorted by file name
    pub fonts: Vec<FontFile>,
}

impl DirectorySnapshot {
    pub fn failed_dir(&self) -> PathBuf {
        self.root.join(FAILED_DIR_NAME)
    }
}

fn entry_names(dir: &Path) -> Result<BTreeSet<OsString>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => {
                names.insert(entry.file_name());
            }
            Err(e) => warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
    Ok(names)
}

/// List the direct entries of `root` without descending into subdirectories.
///
/// Font candidates are regular files (symlinks followed) whose extension is
/// one of `ttf`, `otf`, `ttc`, `fon`, matched case-sensitively.
pub fn scan_directory(root: &Path) -> Result<DirectorySnapshot> {
    if !root.is_dir() {
        return Err(Error::InvalidPath(root.to_path_buf()));
    }

    let entries = entry_names(root)?;

    let fonts: Vec<FontFile> = entries
        .iter()
        .map(|name| root.join(name))
        .filter(|path| path.is_file())
        .filter_map(|path| FontFile::from_path(&path))
        .collect();

    let failed_dir = root.join(FAILED_DIR_NAME);
    let quarantined = if failed_dir.is_dir() {
        entry_names(&failed_dir)?
    } else {
        BTreeSet::new()
    };

    debug!(
        "Scanned {}: {} entries, {} font candidates",
        root.display(),
        entries.len(),
        fonts.len()
    );

    Ok(DirectorySnapshot {
        root: root.to_path_buf(),
        entries,
        quarantined,
        fonts,
    })
}
