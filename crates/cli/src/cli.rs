//! CLI definitions.

use std::path::PathBuf;

use clap::Parser;
use glyphtrim_core::{
    Config, KeepOptions,
    config::{DEFAULT_INPUT_FONT, DEFAULT_KEEP_TEXT, DEFAULT_OUTPUT_FONT},
};

#[derive(Debug, Parser)]
#[command(name = "glyphtrim", version)]
#[command(about = "Trim a font down to the glyphs needed for a fixed set of characters")]
pub struct Cli {
    /// Input font file (.ttf, .otf, .woff, .woff2)
    #[arg(short, long, default_value = DEFAULT_INPUT_FONT)]
    pub input: PathBuf,

    /// Output font file (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FONT)]
    pub output: PathBuf,

    /// Characters to keep
    #[arg(short, long, default_value = DEFAULT_KEEP_TEXT)]
    pub text: String,

    /// Also keep space and ASCII punctuation
    #[arg(long)]
    pub basic_latin: bool,

    /// Also keep ASCII digits
    #[arg(long)]
    pub digits: bool,

    /// Also keep common CJK punctuation
    #[arg(long)]
    pub cjk_punctuation: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    /// Builds the run configuration from the parsed arguments.
    pub fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
            keep_text: self.text.clone(),
            keep: KeepOptions {
                basic_latin: self.basic_latin,
                digits: self.digits,
                cjk_punctuation: self.cjk_punctuation,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_compiled_in_config() {
        let cli = Cli::try_parse_from(["glyphtrim"]).unwrap();
        assert_eq!(cli.config(), Config::default());
        assert!(!cli.yes);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "glyphtrim",
            "-i",
            "in.otf",
            "--output",
            "out.otf",
            "-t",
            "abc",
            "--digits",
            "--cjk-punctuation",
            "-y",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.input, PathBuf::from("in.otf"));
        assert_eq!(config.output, PathBuf::from("out.otf"));
        assert_eq!(config.keep_text, "abc");
        assert_eq!(
            config.keep,
            KeepOptions { basic_latin: false, digits: true, cjk_punctuation: true }
        );
        assert!(cli.yes);
    }
}
