pub mod config_dirs;
pub mod error;
pub mod keybinds;
pub mod read_settings;
pub mod runtime_keybinds;
pub mod write_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{project_config_dir, settings_path, user_cache_dir};
pub use error::SettingsError;
pub use read_settings::{load_settings, load_settings_from};
pub use write_settings::{save_settings, save_settings_to, Settings};
