// Configuration loader
// Loads bundle settings from an explicit file or ~/.codebundle/config.toml

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::settings::AggregateConfig;

/// Load configuration.
///
/// An explicit path must exist. Without one, the user-level config file is
/// used when present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AggregateConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Configuration file not found: {}", path.display());
        }
        return load_config_file(path);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => {
            debug!("No user config found, using defaults");
            Ok(AggregateConfig::default())
        }
    }
}

/// Path of the user-level config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn load_config_file(path: &Path) -> Result<AggregateConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AggregateConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .context("Configuration validation failed")?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}
