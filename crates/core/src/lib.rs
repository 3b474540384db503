//! glyphtrim core - validate, inspect and subset a font to a fixed character set.

pub mod charset;
pub mod config;
pub mod error;
pub mod info;
pub mod report;
pub mod subsetter;
pub mod validate;
pub mod woff;

pub use charset::{BASIC_LATIN, CJK_PUNCTUATION, DIGITS, char_set, prepare_text, preview};
pub use config::{Config, KeepOptions};
pub use error::{Error, Result};
pub use glyphtrim_font_subsetter::probe_engine;
pub use info::{FontInfo, get_font_info};
pub use report::{format_file_size, size_reduction};
pub use subsetter::{FontSubsetter, unmapped_chars};
pub use validate::{SUPPORTED_EXTENSIONS, validate_font_file};
pub use woff::{Flavor, from_sfnt, to_sfnt};
