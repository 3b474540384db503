//! Yes/no confirmation before any work is done.

use std::io::{self, BufRead, Write};

/// Answers that confirm the run, compared after trimming and lowercasing.
pub const AFFIRMATIVE: &[&str] = &["", "y", "yes", "是"];

pub fn is_affirmative(answer: &str) -> bool {
    AFFIRMATIVE.contains(&answer.trim().to_lowercase().as_str())
}

/// Asks `question` and reads one line of answer.
///
/// End of input counts as "no". Ctrl-C is not caught: SIGINT ends the
/// process while it waits here, before any work is done.
pub fn confirm(mut input: impl BufRead, mut output: impl Write, question: &str) -> io::Result<bool> {
    write!(output, "{question} (y/n): ")?;
    output.flush()?;

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => {
            writeln!(output)?;
            Ok(false)
        }
        Ok(_) => Ok(is_affirmative(&answer)),
        Err(e) => Err(e),
    }
}
