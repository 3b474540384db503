//! The four subsetting operations bundled behind one type.

use std::{fs, path::Path};

use glyphtrim_font_subsetter::Subsetter;
use log::{info, warn};
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};

use crate::{
    charset,
    config::KeepOptions,
    error::{Error, Result},
    info::{FontInfo, get_font_info},
    report::format_file_size,
    validate::validate_font_file,
    woff::{Flavor, from_sfnt, to_sfnt},
};

/// Validates, inspects and subsets font files.
#[derive(Debug, Clone)]
pub struct FontSubsetter {
    engine: Subsetter,
}

impl Default for FontSubsetter {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSubsetter {
    /// Creates a subsetter using the engine's default layout features.
    pub fn new() -> Self {
        Self { engine: Subsetter::new() }
    }

    /// See [`validate_font_file`].
    pub fn validate_font_file(&self, path: &Path) -> Result<()> {
        validate_font_file(path)
    }

    /// See [`get_font_info`].
    pub fn get_font_info(&self, path: &Path) -> FontInfo {
        get_font_info(path)
    }

    /// See [`charset::prepare_text`].
    pub fn prepare_text(&self, text: &str, keep: KeepOptions) -> String {
        charset::prepare_text(text, keep)
    }

    /// Subsets `input` to the glyphs needed for `text` and writes the result to `output`.
    ///
    /// The output keeps the container of the input: WOFF and WOFF2 inputs are
    /// unwrapped for the engine and the subset is wrapped again.
    /// An existing `output` is overwritten; its parent directory must exist.
    /// Nothing is cleaned up if writing fails halfway.
    pub fn subset_font(&self, input: &Path, output: &Path, text: &str) -> Result<()> {
        validate_font_file(input)?;

        let data = fs::read(input).map_err(|e| {
            Error::SubsetFailure(format!("failed to read {}: {e}", input.display()))
        })?;

        let flavor = Flavor::detect(&data);
        let sfnt = to_sfnt(&data).map_err(|e| {
            Error::SubsetFailure(format!("failed to unwrap {}: {e}", input.display()))
        })?;

        let missing = unmapped_chars(&sfnt, text);
        if !missing.is_empty() {
            warn!(
                "{} character(s) not in {} will be dropped: {}",
                missing.len(),
                input.display(),
                missing.iter().collect::<String>()
            );
        }

        let subset = self
            .engine
            .clone()
            .with_chars(text.chars())
            .subset(&sfnt)
            .map_err(|e| Error::SubsetFailure(format!("{e:#}")))?;
        let subset = from_sfnt(subset, flavor).map_err(|e| Error::SubsetFailure(e.to_string()))?;

        fs::write(output, &subset).map_err(|e| {
            Error::SubsetFailure(format!("failed to write {}: {e}", output.display()))
        })?;

        info!(
            "Subset {} -> {} ({flavor:?}, {} -> {})",
            input.display(),
            output.display(),
            format_file_size(data.len() as u64),
            format_file_size(subset.len() as u64)
        );

        Ok(())
    }
}

/// Characters of `text` the preferred character map of the sfnt font `data` has no glyph for.
///
/// Returns an empty list when the font cannot be parsed.
pub fn unmapped_chars(data: &[u8], text: &str) -> Vec<char> {
    let Ok(font) = SkrifaFontRef::new(data) else {
        return Vec::new();
    };
    let charmap = font.charmap();
    let mut missing: Vec<char> = text.chars().filter(|c| charmap.map(*c).is_none()).collect();
    missing.sort_unstable();
    missing.dedup();
    missing
}
