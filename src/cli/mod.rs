// CLI module
// Thin adapter between the terminal and the aggregator

mod args;
mod prompt;

pub use args::Cli;
pub use prompt::{prompt_for_root, ROOT_PROMPT};

use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::aggregator::{aggregate_with, AggregateReport};
use crate::config::{load_config, AggregateConfig};
use crate::errors::SkippedFile;

/// Message printed when the root directory does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Error: Directory not found!";

/// Run one bundling invocation from parsed arguments.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.apply_overrides(load_config(cli.config.as_deref())?);
    config.validate()?;

    let root = match cli.root {
        Some(ref root) => root.clone(),
        None => {
            let stdin = io::stdin();
            prompt_for_root(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    let result = aggregate_with(&root, &config, |skipped| {
        let _ = print_skip(&mut io::stdout().lock(), skipped);
    });

    match result {
        Ok(report) => {
            let stdout = io::stdout();
            print_summary(&mut stdout.lock(), &report, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_not_found() => {
            eprintln!("{}", NOT_FOUND_MESSAGE);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// The one user-facing diagnostic for a skipped file.
pub fn print_skip<W: Write>(out: &mut W, skipped: &SkippedFile) -> io::Result<()> {
    writeln!(out, "Skipped binary file: {}", skipped.path.display())
}

/// Confirmation line printed after a successful run.
pub fn print_summary<W: Write>(
    out: &mut W,
    report: &AggregateReport,
    config: &AggregateConfig,
) -> io::Result<()> {
    writeln!(
        out,
        "All {} files combined into '{}'",
        config.suffix,
        report.output_path.display()
    )
}
