// Interactive prompt for the project directory

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const ROOT_PROMPT: &str = "Enter path to project directory: ";

/// Ask for the root directory and return the trimmed answer.
///
/// An empty answer (or EOF) yields an empty path, which the aggregator then
/// reports as a missing directory.
pub fn prompt_for_root<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{}", ROOT_PROMPT).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read project directory")?;

    Ok(PathBuf::from(line.trim()))
}
