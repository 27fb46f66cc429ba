use std::path::Path;

use super::{settings_path, Settings, SettingsError};

/// Load settings from the default location. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    load_settings_from(&path)
}

/// Load settings from `path`. A missing file yields defaults; keys absent
/// from the file keep their default values.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
