use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use ttf_parser::{name_id, Face, PlatformId};

use crate::models::NameLookup;
use crate::utils::resolve_full_name;

/// Decode a big-endian UTF-16 name record, rejecting odd lengths and
/// unpaired surrogates.
pub fn decode_utf16_be(raw: &[u8]) -> Result<String, String> {
    if raw.len() % 2 != 0 {
        return Err(format!("odd UTF-16 byte length {}", raw.len()));
    }

    let units = raw.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| format!("invalid UTF-16: {}", e))
}

/// Look up the Windows full font name (name ID 4, platform 3) in font data.
///
/// Only the first matching record counts; encoding and language IDs are ignored.
/// For collections the first face is read.
pub fn full_name_from_bytes(data: &[u8]) -> NameLookup {
    let face = match Face::parse(data, 0) {
        Ok(face) => face,
        Err(e) => return NameLookup::ParseError(format!("failed to parse font: {}", e)),
    };

    let record = face
        .names()
        .into_iter()
        .find(|name| name.name_id == name_id::FULL_NAME && name.platform_id == PlatformId::Windows);

    let Some(record) = record else {
        return NameLookup::NotFound;
    };

    match decode_utf16_be(record.name) {
        Ok(decoded) => match resolve_full_name(&decoded) {
            Some(name) => NameLookup::Found(name),
            None => NameLookup::NotFound,
        },
        Err(e) => NameLookup::ParseError(e),
    }
}

/// Read a font file and look up its full name.
///
/// Never fails: unreadable files and broken metadata come back as
/// [`NameLookup::ParseError`] after a warning is logged.
pub fn read_full_name(path: &Path) -> NameLookup {
    debug!("Extracting metadata from: {}", path.display());

    let lookup = match fs::read(path) {
        Ok(data) => full_name_from_bytes(&data),
        Err(e) => NameLookup::ParseError(format!("failed to read file: {}", e)),
    };

    match &lookup {
        NameLookup::Found(name) => debug!("Full name of {}: {}", path.display(), name),
        NameLookup::NotFound => debug!("No full name record in {}", path.display()),
        NameLookup::ParseError(detail) => {
            warn!("Failed to read font metadata: {} ({})", detail, path.display())
        }
    }

    lookup
}
