//! glyphtrim CLI library.

pub mod cli;
pub mod prompt;
pub mod run;

pub use cli::Cli;
pub use prompt::confirm;
pub use run::{Outcome, error_hint, print_keep_text, report_error, run};
