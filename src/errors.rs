// Error types for a bundling run
//
// AggregateError aborts a run.
// Undecodable files are reported as SkippedFile entries instead.

use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum AggregateError {
    #[error("Directory not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AggregateError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        AggregateError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when the run was aborted because the root directory is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AggregateError::NotFound { .. })
    }
}

/// Why a matched file contributed nothing to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not valid UTF-8
    Decode,
}

/// A matched file that was left out of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Full path as discovered during the walk
    pub path: PathBuf,
    pub reason: SkipReason,
}
