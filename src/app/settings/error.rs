use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or writing `settings.toml`.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    #[error("bad keybind for `{action}`: {spec}")]
    Keybind { action: String, spec: String },
}
