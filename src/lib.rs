//! Rename font files after the full name in their `name` table.
//!
//! A run scans one directory (never recursing), looks up the Windows full-name
//! record of every `.ttf`, `.otf`, `.ttc` and `.fon` file, and renames the file
//! to `<full name>.<ext>`. Files without a usable name are moved into
//! `failed_fonts/`. Neither step ever overwrites an existing file.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod organizer;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Action, Config, NameLookup, RunReport};
pub use organizer::{plan_directory, rename_fonts_in_directory};
