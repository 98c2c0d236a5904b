//! Interactive tile count entry

use crate::io::configuration::COUNT_PROMPT;
use crate::io::error::{Result, invalid_input};
use std::io::{BufRead, Write};

/// Parse a tile count, accepting only positive integers
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the text is not an integer or is not positive
pub fn parse_tile_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|err| invalid_input(&trimmed, &format!("not a whole number ({err})")))?;

    if value <= 0 {
        return Err(invalid_input(&value, &"tile count must be positive"));
    }

    usize::try_from(value).map_err(|err| invalid_input(&value, &err))
}

/// Prompt on `output` until `input` yields a positive tile count
///
/// Rejected lines are logged and the prompt is shown again.
///
/// # Errors
///
/// Returns an error if:
/// - Reading from `input` or writing to `output` fails
/// - `input` ends before a valid count was entered
pub fn read_tile_count<R: BufRead + ?Sized, W: Write + ?Sized>(
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "{COUNT_PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(invalid_input(
                &"",
                &"input ended before a tile count was entered",
            ));
        }

        match parse_tile_count(&line) {
            Ok(count) => return Ok(count),
            Err(err) => log::debug!("re-prompting: {err}"),
        }
    }
}
