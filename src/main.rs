// codebundle - bundle a project's source files into one text file
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use codebundle::cli::{self, Cli};
use codebundle::logging;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    // Initialize tracing
    logging::init(args.verbose);

    cli::run(&args)
}
