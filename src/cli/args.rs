use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::models::Config;

/// Rename font files after the full font name stored in their metadata.
///
/// Fonts whose name cannot be read are moved into a `failed_fonts`
/// subdirectory.
#[derive(Debug, Parser)]
#[command(name = "font-retitle", version, about, long_about = None)]
pub struct Args {
    /// Directory containing the font files (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print what would happen without renaming or moving anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new(self.debug, self.dry_run)
    }

    /// The directory to process: the argument if given, else the working directory
    pub fn target_directory(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(env::current_dir()?),
        }
    }
}
