//! Settings parser for .mealprep/config.toml

use super::types::Settings;
use mealprep_core::normalize_path;
use mealprep_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const MEALPREP_DIR: &str = ".mealprep";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "MEALPREP_CONFIG";

/// Default config file location for a base directory
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(MEALPREP_DIR).join(CONFIG_FILENAME)
}

/// Load settings for a working directory.
///
/// `MEALPREP_CONFIG` takes precedence over `<base_dir>/.mealprep/config.toml`.
/// Missing or unreadable files fall back to defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let path = std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| config_path(base_dir));

    load_settings_file(&path)
}

/// Load settings from an explicit file, falling back to defaults on error
pub fn load_settings_file(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match parse_settings_file(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse and validate a settings file
pub fn parse_settings_file(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)?;
    let settings: Settings = toml::from_str(&content)?;
    validate_settings(settings)
}

/// Check cross-field constraints and normalize values
pub fn validate_settings(mut settings: Settings) -> Result<Settings> {
    if settings.ui.mobile_max_width >= settings.ui.tablet_max_width {
        return Err(Error::config_invalid(format!(
            "ui.mobile_max_width ({}) must be smaller than ui.tablet_max_width ({})",
            settings.ui.mobile_max_width, settings.ui.tablet_max_width
        )));
    }

    settings.behavior.start_route = normalize_path(&settings.behavior.start_route);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreKind;
    use serial_test::serial;
    use tempfile::tempdir;

    fn write_config(base: &Path, content: &str) {
        let dir = base.join(MEALPREP_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    #[serial]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_load_settings_reads_project_file() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            r#"
[behavior]
start_route = "recipes/"

[session]
store = "memory"
"#,
        );

        let settings = load_settings(temp.path());
        assert_eq!(settings.behavior.start_route, "/recipes");
        assert_eq!(settings.session.store, StoreKind::Memory);
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_project_file() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[behavior]\nstart_route = \"/recipes\"\n");

        let other = temp.path().join("other.toml");
        std::fs::write(&other, "[behavior]\nstart_route = \"/items\"\n").unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &other);
        let settings = load_settings(temp.path());
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(settings.behavior.start_route, "/items");
    }

    #[test]
    #[serial]
    fn test_invalid_toml_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[ui\nicons = ");

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_inverted_breakpoints_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nmobile_max_width = 120\ntablet_max_width = 80\n").unwrap();

        let err = parse_settings_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert_eq!(load_settings_file(&path), Settings::default());
    }
}
