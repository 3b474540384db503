//! Font subsetting wrapper around hb-subset with builder pattern.
//!
//! This crate provides a high-level interface for subsetting fonts to a set of
//! characters using HarfBuzz's hb-subset library. It operates purely on byte
//! slices with no file I/O dependencies; the glyph closure (composite
//! components, GSUB substitutions, ligatures) is computed by HarfBuzz.
//!
//! # Example
//!
//! ```no_run
//! use glyphtrim_font_subsetter::Subsetter;
//!
//! let font_data: &[u8] = &[];
//! let subset = Subsetter::new().with_chars("滴天髓".chars()).subset(font_data);
//! ```

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use hb_subset::{Blob, FontFace, SubsetInput, Tag};

/// Layout features to retain during subsetting.
///
/// These OpenType features are commonly used for proper text rendering
/// and should be preserved in the subset font.
pub const LAYOUT_FEATURES: &[&[u8; 4]] = &[
    b"aalt", b"calt", b"ccmp", b"dlig", b"fwid", b"halt", b"hwid", b"kern", b"liga", b"locl",
    b"mark", b"mkmk", b"pwid", b"rlig", b"vert", b"vhal", b"vrt2",
];

/// Font subsetter with builder pattern.
///
/// Provides a flexible way to configure font subsetting options before
/// performing the subset operation.
#[derive(Debug, Default, Clone)]
pub struct Subsetter {
    chars: BTreeSet<char>,
    layout_features: Vec<[u8; 4]>,
}

impl Subsetter {
    /// Creates a new subsetter with default settings.
    ///
    /// Default settings keep no characters and use the standard [`LAYOUT_FEATURES`].
    pub fn new() -> Self {
        Self {
            layout_features: LAYOUT_FEATURES.iter().map(|f| **f).collect(),
            ..Default::default()
        }
    }

    /// Adds characters to keep in the subset.
    pub fn with_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.chars.extend(chars);
        self
    }

    /// Subsets the font data and returns the result.
    ///
    /// # Arguments
    ///
    /// * `data` - The raw font file data
    ///
    /// # Returns
    ///
    /// The subset font data as a byte vector, or an error if subsetting fails.
    pub fn subset(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut input = SubsetInput::new().context("Failed to allocate subset input")?;

        {
            let mut feature_set = input.layout_feature_tag_set();
            for tag in &self.layout_features {
                feature_set.insert(Tag::new(tag));
            }
        }

        {
            let mut unicode_set = input.unicode_set();
            for c in &self.chars {
                unicode_set.insert(*c);
            }
        }

        let blob = Blob::from_bytes(data).context("Failed to load font data")?;
        let font = FontFace::new(blob).context("Failed to parse font face")?;
        let subset_font = input.subset_font(&font).context("HarfBuzz subsetting failed")?;
        Ok(subset_font.underlying_blob().to_vec())
    }
}

/// Checks that the subsetting engine can be initialised.
///
/// HarfBuzz is linked statically, so this only fails when the engine cannot
/// allocate its input structures.
pub fn probe_engine() -> Result<()> {
    SubsetInput::new().context("HarfBuzz subset engine is unavailable")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_features_are_unique() {
        let unique: BTreeSet<_> = LAYOUT_FEATURES.iter().collect();
        assert_eq!(unique.len(), LAYOUT_FEATURES.len());
    }

    #[test]
    fn test_with_chars_dedups() {
        let subsetter = Subsetter::new().with_chars("ABA".chars()).with_chars("BC".chars());
        assert_eq!(subsetter.chars.iter().collect::<String>(), "ABC");
    }

    #[test]
    fn test_new_uses_default_features() {
        assert_eq!(Subsetter::new().layout_features.len(), LAYOUT_FEATURES.len());
    }

    #[test]
    fn test_probe_engine() {
        assert!(probe_engine().is_ok());
    }
}
