//! Directory scanning, rename planning and application

pub mod planner;
pub mod processor;
pub mod scan;

pub use planner::plan_actions;
pub use processor::{plan_directory, rename_fonts_in_directory};
pub use scan::{scan_directory, DirectorySnapshot};
