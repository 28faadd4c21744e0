// Header block rendering

use crate::config::constants::{PATH_PLACEHOLDER, SEPARATOR_CHAR, SEPARATOR_PREFIX};
use crate::config::AggregateConfig;
use std::path::Path;

/// `// ` followed by `width` separator characters.
pub fn separator_line(width: usize) -> String {
    let mut line = String::with_capacity(SEPARATOR_PREFIX.len().saturating_add(width));
    line.push_str(SEPARATOR_PREFIX);
    line.extend(std::iter::repeat(SEPARATOR_CHAR).take(width));
    line
}

/// Bytes written before a file's content: a blank line, the header line,
/// the separator line and another blank line.
pub fn render_header(relative: &Path, config: &AggregateConfig) -> String {
    let header_line = config
        .header_template
        .replace(PATH_PLACEHOLDER, &relative.display().to_string());

    format!(
        "\n{}\n{}\n\n",
        header_line,
        separator_line(config.separator_width)
    )
}
