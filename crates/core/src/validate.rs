//! Input font validation.

use std::{ffi::OsStr, fs, path::Path};

use read_fonts::{FontRef, TableProvider};

use crate::{
    error::{Error, Result},
    woff::to_sfnt,
};

/// File extensions accepted as font input (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ttf", "otf", "woff", "woff2"];

/// Checks that `path` exists, has a supported extension and parses as a font.
///
/// WOFF and WOFF2 files are unwrapped before parsing.
/// The extension is checked before the file is read, so unsupported files are
/// never parsed.
pub fn validate_font_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::UnsupportedFormat(format!(".{extension}")));
    }

    let data = fs::read(path).map_err(|e| Error::invalid_font(path, e))?;
    let sfnt = to_sfnt(&data).map_err(|e| Error::invalid_font(path, e))?;
    let font = FontRef::new(&sfnt).map_err(|e| Error::invalid_font(path, e))?;
    font.head().map_err(|e| Error::invalid_font(path, e))?;
    Ok(())
}
