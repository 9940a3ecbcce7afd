use crate::error::Result;
use std::io::{BufRead, Write};

/// Writes `prompt`, then reads one line and returns it trimmed
///
/// End of input reads as an empty line.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Uses `given` when present, otherwise prompts for it
pub fn value_or_prompt<R: BufRead, W: Write>(
    given: Option<String>,
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    match given {
        Some(value) => Ok(value.trim().to_string()),
        None => read_line(input, out, prompt),
    }
}
