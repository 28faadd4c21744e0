// Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::AggregateConfig;

#[derive(Parser, Debug, Default)]
#[command(
    name = "codebundle",
    version,
    about = "Bundle every source file under a directory into one annotated text file"
)]
pub struct Cli {
    #[arg(help = "Project directory to scan (prompted for when omitted)")]
    pub root: Option<PathBuf>,

    #[arg(short, long, help = "Output file [default: combined_code.txt]")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "File-name suffix to bundle [default: .swift]")]
    pub suffix: Option<String>,

    #[arg(long, help = "Number of '=' characters in the separator line [default: 50]")]
    pub separator_width: Option<usize>,

    #[arg(long, help = "Header line template; {path} is replaced by the relative path")]
    pub header_template: Option<String>,

    #[arg(long, help = "Visit files in path order instead of raw directory order")]
    pub sort: bool,

    #[arg(long, help = "Config file (default: ~/.codebundle/config.toml when present)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line flags over a loaded configuration.
    pub fn apply_overrides(&self, mut config: AggregateConfig) -> AggregateConfig {
        if let Some(ref output) = self.output {
            config.output_path = output.clone();
        }
        if let Some(ref suffix) = self.suffix {
            config.suffix = suffix.clone();
        }
        if let Some(width) = self.separator_width {
            config.separator_width = width;
        }
        if let Some(ref template) = self.header_template {
            config.header_template = template.clone();
        }
        if self.sort {
            config.sort = true;
        }
        config
    }
}
