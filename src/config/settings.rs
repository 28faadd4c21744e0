// Configuration structs

use super::constants::*;
use crate::errors::AggregateError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything that shapes one bundling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// Case-sensitive file-name ending that selects candidate files
    pub suffix: String,

    /// Output document, created or truncated at the start of a run
    pub output_path: PathBuf,

    /// Number of `=` characters in the separator line
    pub separator_width: usize,

    /// Header line; `{path}` is replaced by the relative path
    pub header_template: String,

    /// Sort entries by name within each directory instead of using raw walk order
    pub sort: bool,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
            sort: false,
        }
    }
}

impl AggregateConfig {
    /// Check values that would otherwise produce a silently useless run.
    pub fn validate(&self) -> Result<(), AggregateError> {
        if self.suffix.is_empty() {
            return Err(AggregateError::Config(
                "suffix must not be empty".to_string(),
            ));
        }

        if !self.header_template.contains(PATH_PLACEHOLDER) {
            return Err(AggregateError::Config(format!(
                "header_template must contain {}, got '{}'",
                PATH_PLACEHOLDER, self.header_template
            )));
        }

        if self.separator_width > MAX_SEPARATOR_WIDTH {
            return Err(AggregateError::Config(format!(
                "separator_width must be at most {}, got {}",
                MAX_SEPARATOR_WIDTH, self.separator_width
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(AggregateError::Config(
                "output_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
