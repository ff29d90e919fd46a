use std::ffi::{OsStr, OsString};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that would turn a font name into a path instead of a file name
    static ref PATH_BREAKING_CHARS: Regex = Regex::new(r"[/\\\x00]").unwrap();
}

/// Reduce a decoded full-name record to the name used for the file.
///
/// Some vendors store `"<family>;<full name>"` style values; only the part
/// after the last semicolon is kept. Returns `None` when nothing is left.
pub fn resolve_full_name(decoded: &str) -> Option<String> {
    let name = match decoded.rfind(';') {
        Some(idx) => &decoded[idx + 1..],
        None => decoded,
    };
    let name = name.trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Make a resolved name safe to use as a single file name.
/// Case and every other character are preserved.
pub fn clean_name(name: &str) -> String {
    PATH_BREAKING_CHARS.replace_all(name, "_").into_owned()
}

/// `<stem>.<ext>` for counter 0, `<stem>_<counter>.<ext>` otherwise
pub fn numbered_file_name(stem: &OsStr, counter: u32, extension: &OsStr) -> OsString {
    let mut name = stem.to_os_string();
    if counter > 0 {
        name.push(format!("_{}", counter));
    }
    if !extension.is_empty() {
        name.push(".");
        name.push(extension);
    }
    name
}

/// First of `stem.ext`, `stem_1.ext`, `stem_2.ext`, ... for which `is_taken` is false
pub fn unique_file_name<F>(stem: &OsStr, extension: &OsStr, mut is_taken: F) -> OsString
where
    F: FnMut(&OsStr) -> bool,
{
    let mut counter = 0;
    let mut candidate = numbered_file_name(stem, counter, extension);

    while is_taken(&candidate) {
        counter += 1;
        candidate = numbered_file_name(stem, counter, extension);
    }

    candidate
}
