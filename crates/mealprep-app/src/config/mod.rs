//! Configuration file parsing for the MealPrepper dashboard
//!
//! Supports:
//! - `.mealprep/config.toml` - Global settings
//! - `MEALPREP_CONFIG` - Explicit config file path

pub mod settings;
pub mod types;

pub use settings::{
    config_path, load_settings, load_settings_file, parse_settings_file, validate_settings,
    CONFIG_ENV_VAR,
};
pub use types::*;
