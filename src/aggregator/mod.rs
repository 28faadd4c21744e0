// Aggregator - concatenates every matching file under a root into one document
//
// Each decoded file is written as:
//
//   \n<header line>\n
//   // ==================================================\n
//   \n
//   <content>\n
//
// Content is read as UTF-8 text with `\r\n` and lone `\r` turned into `\n`.
// Files that are not valid UTF-8 are skipped and reported, never partially written.

pub mod discovery;
pub mod header;

pub use discovery::{discover, matches_suffix};
pub use header::{render_header, separator_line};

use crate::config::AggregateConfig;
use crate::errors::{AggregateError, SkipReason, SkippedFile};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of one bundling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    /// Where the output document was written
    pub output_path: PathBuf,
    /// Relative paths of the files written, in write order
    pub written: Vec<PathBuf>,
    /// Matched files that contributed nothing to the output
    pub skipped: Vec<SkippedFile>,
}

impl AggregateReport {
    pub fn files_written(&self) -> usize {
        self.written.len()
    }
}

/// Bundle every file under `root` matching `config.suffix` into
/// `config.output_path`.
///
/// Fails with [`AggregateError::NotFound`] before touching the output if
/// `root` does not exist.
pub fn aggregate(root: &Path, config: &AggregateConfig) -> Result<AggregateReport, AggregateError> {
    aggregate_with(root, config, |_| {})
}

/// Same as [`aggregate`], calling `on_skip` as soon as a matched file is
/// left out, so callers see skips even when a later file aborts the run.
pub fn aggregate_with<F>(
    root: &Path,
    config: &AggregateConfig,
    mut on_skip: F,
) -> Result<AggregateReport, AggregateError>
where
    F: FnMut(&SkippedFile),
{
    if !root.exists() {
        return Err(AggregateError::NotFound {
            path: root.to_path_buf(),
        });
    }
    config.validate()?;

    let output_path = config.output_path.as_path();
    let file = File::create(output_path).map_err(|e| AggregateError::io(output_path, e))?;
    let output_identity = fs::canonicalize(output_path).ok();
    let mut out = BufWriter::new(file);

    let mut report = AggregateReport {
        output_path: output_path.to_path_buf(),
        ..Default::default()
    };

    for path in discover(root, config) {
        if is_output_file(&path, output_path, output_identity.as_deref()) {
            debug!("Not bundling the output document itself: {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path.as_path()).to_path_buf();
        let bytes = fs::read(&path).map_err(|e| AggregateError::io(&path, e))?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => normalize_newlines(text),
            Err(e) => {
                debug!("{} is not UTF-8 ({}), leaving it out", path.display(), e);
                let skipped = SkippedFile {
                    path,
                    reason: SkipReason::Decode,
                };
                on_skip(&skipped);
                report.skipped.push(skipped);
                continue;
            }
        };

        debug!("Bundling {} ({} bytes)", relative.display(), text.len());
        write_block(&mut out, &relative, &text, config)
            .map_err(|e| AggregateError::io(output_path, e))?;
        report.written.push(relative);
    }

    out.flush().map_err(|e| AggregateError::io(output_path, e))?;

    info!(
        "Bundled {} file(s) into {} ({} skipped)",
        report.written.len(),
        output_path.display(),
        report.skipped.len()
    );

    Ok(report)
}

/// Turn `\r\n` and lone `\r` line endings into `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn write_block<W: Write>(
    out: &mut W,
    relative: &Path,
    text: &str,
    config: &AggregateConfig,
) -> std::io::Result<()> {
    out.write_all(render_header(relative, config).as_bytes())?;
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")
}

/// Whether a candidate is the output document we are currently writing.
fn is_output_file(candidate: &Path, output_path: &Path, output_identity: Option<&Path>) -> bool {
    let Some(identity) = output_identity else {
        return false;
    };
    // Only canonicalize when the names line up
    if candidate.file_name() != output_path.file_name() {
        return false;
    }
    fs::canonicalize(candidate)
        .map(|c| c.as_path() == identity)
        .unwrap_or(false)
}
