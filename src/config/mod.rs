// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{load_config, user_config_path};
pub use settings::AggregateConfig;
