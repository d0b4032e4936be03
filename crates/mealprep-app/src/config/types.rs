//! Configuration types for the MealPrepper dashboard
//!
//! Defines:
//! - `Settings` - Global application settings (.mealprep/config.toml)
//! - Related sub-types and enums

use mealprep_core::{paths, IconMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (.mealprep/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub user: UserSettings,
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon glyph set
    #[serde(default)]
    pub icons: IconMode,

    /// Widest terminal (columns) still laid out as mobile
    #[serde(default = "default_mobile_max_width")]
    pub mobile_max_width: u16,

    /// Widest terminal (columns) still laid out as tablet
    #[serde(default = "default_tablet_max_width")]
    pub tablet_max_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            mobile_max_width: default_mobile_max_width(),
            tablet_max_width: default_tablet_max_width(),
        }
    }
}

fn default_mobile_max_width() -> u16 {
    59
}

fn default_tablet_max_width() -> u16 {
    99
}

/// Where the session token is kept between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// JSON file under the user config directory
    #[default]
    File,
    /// Forget the session on exit
    Memory,
}

/// Session persistence settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SessionSettings {
    #[serde(default)]
    pub store: StoreKind,

    /// Override for the session file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SessionSettings {
    /// Resolved session file path (`<config_dir>/mealprep/session.json` by default)
    pub fn file_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("mealprep")
                .join("session.json")
        })
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Route opened at startup
    #[serde(default = "default_start_route")]
    pub start_route: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
        }
    }
}

fn default_start_route() -> String {
    paths::DASHBOARD.to_string()
}

/// Defaults applied to users signed in through the offline provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserSettings {
    #[serde(default)]
    pub default_full_name: Option<String>,
}
