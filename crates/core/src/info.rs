//! Best-effort font information for reporting.

use std::{fs, path::Path};

use log::debug;
use read_fonts::{FontRef, TableProvider, tables::name::NameId};
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};

use crate::{
    error::{Error, Result},
    woff::to_sfnt,
};

/// Display name used when a font has no readable family name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Display information about a font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    /// Family name (name ID 1).
    pub name: String,
    /// Number of entries in the preferred character map.
    pub char_count: usize,
    /// File size in bytes, as stored (compressed for web fonts).
    pub file_size: u64,
}

impl FontInfo {
    /// Sentinel returned when the font cannot be read.
    pub fn unknown() -> Self {
        Self { name: UNKNOWN_NAME.to_string(), char_count: 0, file_size: 0 }
    }

    /// Reads font information from a file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| Error::invalid_font(path, e))?;
        let sfnt = to_sfnt(&data).map_err(|e| Error::invalid_font(path, e))?;
        let font = FontRef::new(&sfnt).map_err(|e| Error::invalid_font(path, e))?;
        let sfont = SkrifaFontRef::new(&sfnt).map_err(|e| Error::invalid_font(path, e))?;

        let name = family_name(&font).unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let char_count = sfont.charmap().mappings().count();
        let file_size = fs::metadata(path).map_err(|e| Error::invalid_font(path, e))?.len();

        Ok(Self { name, char_count, file_size })
    }
}

/// Reads font information, falling back to [`FontInfo::unknown`] on any error.
pub fn get_font_info(path: &Path) -> FontInfo {
    FontInfo::read(path).unwrap_or_else(|e| {
        debug!("Could not read font info for {}: {e}", path.display());
        FontInfo::unknown()
    })
}

/// First decodable family name record.
fn family_name(font: &FontRef) -> Option<String> {
    let name = font.name().ok()?;
    name.name_record()
        .iter()
        .filter(|record| record.name_id() == NameId::FAMILY_NAME)
        .find_map(|record| record.string(name.string_data()).ok())
        .map(|s| s.chars().collect())
}
