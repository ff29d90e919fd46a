//! Common test utilities: minimal in-memory TrueType fonts
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const PLATFORM_MAC: u16 = 1;
pub const PLATFORM_WINDOWS: u16 = 3;
pub const FULL_NAME: u16 = 4;

/// One raw `name` table record
pub struct NameRecord {
    pub platform_id: u16,
    pub name_id: u16,
    pub data: Vec<u8>,
}

impl NameRecord {
    pub fn windows_full_name(name: &str) -> Self {
        Self {
            platform_id: PLATFORM_WINDOWS,
            name_id: FULL_NAME,
            data: utf16_be(name),
        }
    }
}

pub fn utf16_be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|unit| unit.to_be_bytes()).collect()
}

fn head_table() -> Vec<u8> {
    let mut data = vec![0u8; 54];
    data[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    data[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magic
    data[18..20].copy_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
    data
}

fn hhea_table() -> Vec<u8> {
    let mut data = vec![0u8; 36];
    data[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    data
}

fn maxp_table() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    data.extend_from_slice(&1u16.to_be_bytes()); // numGlyphs
    data
}

fn name_table(records: &[NameRecord]) -> Vec<u8> {
    let count = records.len() as u16;
    let string_offset = 6 + 12 * count;

    let mut data = Vec::new();
    data.extend_from_slice(&0u16.to_be_bytes()); // format
    data.extend_from_slice(&count.to_be_bytes());
    data.extend_from_slice(&string_offset.to_be_bytes());

    let mut storage = Vec::new();
    for record in records {
        let (encoding_id, language_id) = if record.platform_id == PLATFORM_WINDOWS {
            (1u16, 0x0409u16)
        } else {
            (0, 0)
        };
        data.extend_from_slice(&record.platform_id.to_be_bytes());
        data.extend_from_slice(&encoding_id.to_be_bytes());
        data.extend_from_slice(&language_id.to_be_bytes());
        data.extend_from_slice(&record.name_id.to_be_bytes());
        data.extend_from_slice(&(record.data.len() as u16).to_be_bytes());
        data.extend_from_slice(&(storage.len() as u16).to_be_bytes());
        storage.extend_from_slice(&record.data);
    }
    data.extend_from_slice(&storage);
    data
}

/// A TrueType face whose table offsets assume it starts at `base` in the file
fn build_face(records: &[NameRecord], base: usize) -> Vec<u8> {
    // Table records must be sorted by tag
    let tables: [(&[u8; 4], Vec<u8>); 4] = [
        (b"head", head_table()),
        (b"hhea", hhea_table()),
        (b"maxp", maxp_table()),
        (b"name", name_table(records)),
    ];

    let mut header = Vec::new();
    header.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    header.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    header.extend_from_slice(&[0u8; 6]); // searchRange, entrySelector, rangeShift

    let mut body = Vec::new();
    let mut offset = base + 12 + 16 * tables.len();
    for (tag, data) in &tables {
        header.extend_from_slice(*tag);
        header.extend_from_slice(&0u32.to_be_bytes()); // checksum
        header.extend_from_slice(&(offset as u32).to_be_bytes());
        header.extend_from_slice(&(data.len() as u32).to_be_bytes());

        let mut padded = data.clone();
        while padded.len() % 4 != 0 {
            padded.push(0);
        }
        offset += padded.len();
        body.extend_from_slice(&padded);
    }

    header.extend_from_slice(&body);
    header
}

pub fn build_font(records: &[NameRecord]) -> Vec<u8> {
    build_face(records, 0)
}

/// A single-face TrueType collection
pub fn build_collection(records: &[NameRecord]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"ttcf");
    data.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&16u32.to_be_bytes());
    data.extend_from_slice(&build_face(records, 16));
    data
}

pub fn font_named(full_name: &str) -> Vec<u8> {
    build_font(&[NameRecord::windows_full_name(full_name)])
}

pub fn write_font(dir: &Path, file_name: &str, full_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, font_named(full_name)).expect("Failed to write font");
    path
}

pub fn write_garbage(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, b"this is not a font").expect("Failed to write file");
    path
}

/// Sorted names of the direct entries of `dir`
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
