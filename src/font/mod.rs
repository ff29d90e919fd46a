//! Font metadata extraction

pub mod metadata;

pub use metadata::{decode_utf16_be, full_name_from_bytes, read_full_name};
