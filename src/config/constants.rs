// Project-wide constants
//
// Centralised here so the output format has one source of truth.
// Import via `use crate::config::constants::*;`.

/// File-name ending that selects candidate files.
pub const DEFAULT_SUFFIX: &str = ".swift";

/// Output document written when no other path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "combined_code.txt";

/// Number of `=` characters in the separator line.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 50;

/// Largest separator width accepted from config or flags.
pub const MAX_SEPARATOR_WIDTH: usize = 1024;

/// Placeholder replaced by the file's relative path in the header template.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Header line written before each file's content.
pub const DEFAULT_HEADER_TEMPLATE: &str = "// MARK: - {path}";

/// Comment token that prefixes the separator line.
pub const SEPARATOR_PREFIX: &str = "// ";

/// Character repeated to build the separator line.
pub const SEPARATOR_CHAR: char = '=';

/// Config directory under the user's home (`~/.codebundle`).
pub const CONFIG_DIR_NAME: &str = ".codebundle";

/// Config file name inside `CONFIG_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.toml";
