//! Run configuration.

use std::path::PathBuf;

/// Input font used when no path is given.
pub const DEFAULT_INPUT_FONT: &str = "jhlst.ttf";

/// Output font used when no path is given.
pub const DEFAULT_OUTPUT_FONT: &str = "jhlst_sub.ttf";

/// Characters kept when no text is given.
pub const DEFAULT_KEEP_TEXT: &str = "滴天髓";

/// Which supplementary character sets to add to the keep-text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepOptions {
    /// Space and ASCII punctuation.
    pub basic_latin: bool,
    /// ASCII digits.
    pub digits: bool,
    /// Common CJK and full-width punctuation.
    pub cjk_punctuation: bool,
}

impl KeepOptions {
    /// All supplementary sets enabled.
    pub const ALL: Self = Self { basic_latin: true, digits: true, cjk_punctuation: true };
}

/// Configuration for a single subsetting run.
///
/// Built once at startup and passed by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub keep_text: String,
    pub keep: KeepOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FONT),
            output: PathBuf::from(DEFAULT_OUTPUT_FONT),
            keep_text: DEFAULT_KEEP_TEXT.to_string(),
            keep: KeepOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("jhlst.ttf"));
        assert_eq!(config.output, PathBuf::from("jhlst_sub.ttf"));
        assert_eq!(config.keep_text, "滴天髓");
        assert_eq!(config.keep, KeepOptions::default());
    }

    #[test]
    fn test_keep_all() {
        let all = KeepOptions::ALL;
        assert!(all.basic_latin && all.digits && all.cjk_punctuation);
    }
}
