//! Data types shared across the crate

pub mod action;
pub mod config;
pub mod font;

pub use action::{Action, RunReport};
pub use config::{Config, FAILED_DIR_NAME};
pub use font::{FontFile, FontFormat, NameLookup, QuarantineReason};
