/// Name of the quarantine directory created under the scanned directory
pub const FAILED_DIR_NAME: &str = "failed_fonts";

/// Configuration for a renaming run
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Plan and print actions without touching the filesystem
    pub dry_run: bool,
}

impl Config {
    /// Create a new configuration
    pub fn new(debug_mode: bool, dry_run: bool) -> Self {
        Self {
            debug_mode,
            dry_run,
        }
    }
}
