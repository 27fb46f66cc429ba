use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::{settings_path, SettingsError};

/// User-tunable settings persisted as TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// People generated when the screen first opens.
    pub seed_people: usize,
    /// Frames a changed row stays highlighted after an update.
    pub highlight_ticks: u8,
    /// `dark`, `light`, or a path to a theme TOML file.
    pub theme: String,
    /// Compute partition + diff on a worker thread.
    pub background_diff: bool,
    /// Filter used when `DIFFTABLE_LOG` is unset.
    pub log_level: String,
    /// Action name to key list overrides, e.g. `add = ["+", "a"]`.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed_people: 7,
            highlight_ticks: 10,
            theme: "dark".to_string(),
            background_diff: false,
            log_level: "info".to_string(),
            keybinds: BTreeMap::new(),
        }
    }
}

/// Persist settings to the default location, creating directories as needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(settings, &path)
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let text = toml::to_string_pretty(settings)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, text).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
