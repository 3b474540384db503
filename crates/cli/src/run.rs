//! The subsetting run and its console report.

use std::{
    io::{self, Write},
    path,
};

use glyphtrim_core::{
    Config, Error, FontInfo, FontSubsetter, Result, format_file_size, get_font_info, preview,
    size_reduction,
};
use log::debug;

/// Number of characters shown in the keep-text preview.
const PREVIEW_CHARS: usize = 50;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The subset font was written.
    Completed,
    /// The configured input font does not exist; nothing was done.
    MissingInput,
    /// Subsetting returned but no output file was found.
    NoOutput,
}

/// Prints the configured keep-text shown ahead of the confirmation prompt.
pub fn print_keep_text(config: &Config) {
    println!("Configured keep text:");
    println!("{}", "-".repeat(30));
    println!("{}", config.keep_text.trim());
    println!("{}", "-".repeat(30));
    println!();
}

/// Hint printed after an error, if there is something the user can change.
pub fn error_hint(error: &Error) -> Option<&'static str> {
    match error {
        Error::MissingEngine(_) => {
            Some("glyphtrim needs HarfBuzz; rebuild with the bundled hb-subset feature enabled")
        }
        Error::NotFound(_) => Some("Pass --input with the path of an existing font file"),
        Error::UnsupportedFormat(_) => Some("Supported formats: .ttf, .otf, .woff, .woff2"),
        Error::InvalidFont { .. } | Error::SubsetFailure(_) => None,
    }
}

/// Writes the error line for `error`, followed by its hint if it has one.
pub fn report_error(error: &Error, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Error: {error}")?;
    if let Some(hint) = error_hint(error) {
        writeln!(output, "{hint}")?;
    }
    Ok(())
}

/// Subsets the configured font, printing progress and before/after statistics.
pub fn run(config: &Config) -> Result<Outcome> {
    let subsetter = FontSubsetter::new();

    println!("glyphtrim - font subsetter");
    println!("{}", "=".repeat(50));

    if !config.input.exists() {
        println!("Input font not found: {}", config.input.display());
        println!("Pass --input with the path of the font to subset");
        return Ok(Outcome::MissingInput);
    }

    let text = subsetter.prepare_text(&config.keep_text, config.keep);
    debug!("Prepared {} characters from {:?}", text.chars().count(), config.keep);

    println!("Input:  {}", config.input.display());
    println!("Output: {}", config.output.display());
    println!("Characters to keep: {}", text.chars().count());
    println!("Preview: {}", preview(&text, PREVIEW_CHARS));
    println!();

    let original = subsetter.get_font_info(&config.input);
    println!("Original font:");
    print_info(&original);
    println!();

    println!("Subsetting font...");
    subsetter.subset_font(&config.input, &config.output, &text)?;

    Ok(report_subset(config, &original))
}

/// Reports the written subset against the `original` statistics.
fn report_subset(config: &Config, original: &FontInfo) -> Outcome {
    if !config.output.exists() {
        println!("Font subsetting failed: {} was not written", config.output.display());
        return Outcome::NoOutput;
    }

    let subset = get_font_info(&config.output);
    println!("Font subsetting complete!");
    println!();
    println!("Subset font:");
    println!("  File: {}", config.output.display());
    print_info(&subset);
    if let Some(reduction) = size_reduction(original.file_size, subset.file_size) {
        println!("  Reduced by: {reduction:.1}%");
    }
    println!();

    let absolute = path::absolute(&config.output).unwrap_or_else(|_| config.output.clone());
    println!("Done! The subset font is at:");
    println!("   {}", absolute.display());

    Outcome::Completed
}

fn print_info(info: &FontInfo) {
    println!("  Name: {}", info.name);
    println!("  Size: {}", format_file_size(info.file_size));
    println!("  Characters: {}", info.char_count);
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn config(input: PathBuf, output: PathBuf) -> Config {
        Config { input, output, ..Config::default() }
    }

    #[test]
    fn missing_input_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.ttf");
        let outcome = run(&config(dir.path().join("missing.ttf"), output.clone())).unwrap();
        assert_eq!(outcome, Outcome::MissingInput);
        assert!(!output.exists());
    }

    #[test]
    fn invalid_font_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.ttf");
        fs::write(&input, b"not a font").unwrap();

        let result = run(&config(input, dir.path().join("out.ttf")));
        assert!(matches!(result, Err(Error::InvalidFont { .. })));
    }

    #[test]
    fn unsupported_format_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("font.pfb");
        fs::write(&input, b"not a font").unwrap();

        let error = run(&config(input, dir.path().join("out.ttf"))).unwrap_err();
        assert!(matches!(error, Error::UnsupportedFormat(_)));
        assert!(error_hint(&error).is_some());
    }

    #[test]
    fn missing_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path().join("in.ttf"), dir.path().join("never-written.ttf"));
        assert_eq!(report_subset(&config, &FontInfo::unknown()), Outcome::NoOutput);
    }

    #[test]
    fn unknown_original_size_still_completes() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.ttf");
        fs::write(&output, b"subset").unwrap();

        let original = FontInfo::unknown();
        assert_eq!(size_reduction(original.file_size, 6), None);
        let config = config(dir.path().join("in.ttf"), output);
        assert_eq!(report_subset(&config, &original), Outcome::Completed);
    }

    #[test]
    fn error_line_and_hint() {
        let mut output = Vec::new();
        report_error(&Error::NotFound(PathBuf::from("x.ttf")), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Error: font file not found: x.ttf\nPass --input with the path of an existing font file\n"
        );

        let mut output = Vec::new();
        report_error(&Error::SubsetFailure("boom".into()), &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().starts_with("Error: "));
    }

    #[test]
    fn hints() {
        assert!(error_hint(&Error::MissingEngine("oom".into())).is_some());
        assert!(error_hint(&Error::NotFound(PathBuf::from("x.ttf"))).is_some());
        assert!(error_hint(&Error::SubsetFailure("boom".into())).is_none());
    }
}
