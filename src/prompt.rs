//! Interactive prompts read from standard input.
//!
//! Each prompt is generic over a [`BufRead`] source and a [`Write`] sink so
//! the orchestrator can be driven from in-memory buffers in tests. The sort
//! and duplicate prompts repeat until a valid answer arrives; running out
//! of input while waiting is reported as [`PromptError::InputClosed`].

use std::io::{self, BufRead, Write};

use crate::duplicates::SortOrder;
use crate::scanner::ExtensionFilter;

/// Errors raised while prompting.
#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    /// Reading input or writing the prompt failed.
    #[error("Prompt I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before a valid answer was given.
    #[error("Input closed while waiting for: {0}")]
    InputClosed(&'static str),
}

/// Read one line, without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// First whitespace-separated token of a line, or `""`.
fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

fn wrong_option<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Wrong option")?;
    writeln!(output)
}

/// Ask for the extension to filter by.
///
/// An empty line, or end of input, means no filtering.
///
/// # Errors
///
/// Returns [`PromptError::Io`] on read or write failure.
pub fn ask_extension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ExtensionFilter, PromptError> {
    writeln!(output, "Enter file format:")?;
    output.flush()?;

    let line = read_line(input)?.unwrap_or_default();
    let filter = ExtensionFilter::new(first_token(&line));
    log::debug!("Extension filter: {:?}", filter.value());
    Ok(filter)
}

/// Ask for the size sort direction (`1` descending, `2` ascending).
///
/// # Errors
///
/// Returns [`PromptError::InputClosed`] if input ends before a valid option.
pub fn ask_sort_order<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SortOrder, PromptError> {
    writeln!(output, "Size sorting options:")?;
    writeln!(output, "1. Descending")?;
    writeln!(output, "2. Ascending")?;

    loop {
        writeln!(output, "Enter a sorting option:")?;
        output.flush()?;

        let line = read_line(input)?.ok_or(PromptError::InputClosed("sorting option"))?;
        match first_token(&line).parse::<i64>() {
            Ok(1) => return Ok(SortOrder::Descending),
            Ok(2) => return Ok(SortOrder::Ascending),
            _ => wrong_option(output)?,
        }
    }
}

/// Ask whether duplicates should be checked (`yes` / `no`).
///
/// # Errors
///
/// Returns [`PromptError::InputClosed`] if input ends before a valid answer.
pub fn ask_check_duplicates<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<bool, PromptError> {
    writeln!(output)?;

    loop {
        writeln!(output, "Check for duplicates")?;
        output.flush()?;

        let line = read_line(input)?.ok_or(PromptError::InputClosed("duplicate check answer"))?;
        match first_token(&line) {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => wrong_option(output)?,
        }
    }
}
