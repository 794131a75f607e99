//! Yes/no confirmation prompt

use std::io::{self, BufRead, Write};

use crate::config::{NO_ANSWERS, YES_ANSWERS};

/// Ask `question` until the answer is recognisably yes or no.
///
/// End of input counts as "no".
pub fn confirm(question: &str, mut input: impl BufRead, mut output: impl Write) -> io::Result<bool> {
    loop {
        write!(output, "\n{} (y/n): ", question)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }

        let answer = line.trim().to_lowercase();
        if YES_ANSWERS.contains(&answer.as_str()) {
            return Ok(true);
        }
        if NO_ANSWERS.contains(&answer.as_str()) {
            return Ok(false);
        }

        writeln!(output, "Please answer y (yes) or n (no)")?;
    }
}
