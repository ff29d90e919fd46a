use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::utils::naming::unique_file_name;

/// Create a directory (and missing parents) if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Whether two paths name the same file on disk
#[cfg(unix)]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

/// Whether two paths name the same file on disk
#[cfg(not(unix))]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => {
            a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
        }
        _ => false,
    }
}

/// Pick a free destination for `source` inside `dir`, starting from `stem.ext`
/// and appending `_1`, `_2`, ... to the stem while the path belongs to another file.
pub fn free_destination(dir: &Path, stem: &OsStr, extension: &OsStr, source: &Path) -> PathBuf {
    let name = unique_file_name(stem, extension, |candidate| {
        let path = dir.join(candidate);
        path.symlink_metadata().is_ok() && !is_same_file(source, &path)
    });
    dir.join(name)
}

/// Move a file, falling back to copy+delete if rename fails.
/// Refuses to replace a different existing file. If the source cannot be
/// removed after copying, the copy is discarded and the error returned, so the
/// file never ends up in two places.
pub fn safe_move_file(src: &Path, dest: &Path) -> Result<()> {
    if dest.symlink_metadata().is_ok() && !is_same_file(src, dest) {
        return Err(Error::DestinationExists(dest.to_path_buf()));
    }

    // First try to rename (fast path)
    match fs::rename(src, dest) {
        Ok(_) => Ok(()),
        Err(e) => {
            debug!("Rename failed for {}, trying copy+delete: {}", src.display(), e);

            fs::copy(src, dest)?;

            if let Err(e) = fs::remove_file(src) {
                if let Err(cleanup) = fs::remove_file(dest) {
                    warn!("Could not remove partial copy {}: {}", dest.display(), cleanup);
                }
                return Err(e.into());
            }
            Ok(())
        }
    }
}

/// Move `src` into `dest_dir` without overwriting anything there.
///
/// The directory is created on demand. The file keeps its name unless that
/// name is already taken, in which case `_1`, `_2`, ... is appended to the
/// stem. Returns the final destination.
pub fn relocate_to_directory(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    ensure_directory_exists(dest_dir)?;

    let stem = src.file_stem().ok_or_else(|| Error::InvalidPath(src.to_path_buf()))?;
    let extension = src.extension().unwrap_or_default();
    let dest = free_destination(dest_dir, stem, extension, src);

    safe_move_file(src, &dest)?;
    info!("Moved {} to {}", src.display(), dest.display());

    Ok(dest)
}
