use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for font-retitle operations
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// A move would have replaced an existing file
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
}

/// Result type alias for font-retitle operations
pub type Result<T> = std::result::Result<T, Error>;
