//! Log setup for the binary.
//!
//! The terminal belongs to the UI while the screen is open, so logs go to a
//! file under the user cache directory instead of stderr.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::settings::{user_cache_dir, Settings};

/// Environment variable holding an `EnvFilter` directive; wins over settings.
pub const LOG_ENV: &str = "DIFFTABLE_LOG";
pub const LOG_FILE: &str = "diffTable.log";

/// Filter from `DIFFTABLE_LOG`, else from `settings.log_level`, else `info`.
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Where the log file goes: `dir` if given, else the cache dir, else the
/// system temp dir.
pub fn log_dir(dir: Option<&Path>) -> PathBuf {
    dir.map(Path::to_path_buf)
        .or_else(user_cache_dir)
        .unwrap_or_else(std::env::temp_dir)
}

/// Install the global subscriber writing to `<dir>/diffTable.log`.
///
/// Keep the returned guard alive for as long as logs should be flushed.
/// Returns `None` when a global subscriber is already set.
pub fn init_logging(settings: &Settings, dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let dir = log_dir(dir);
    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::registry()
        .with(build_filter(settings))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .is_ok();
    if !installed {
        return Ok(None);
    }
    tracing::debug!("logging to {}", dir.join(LOG_FILE).display());
    Ok(Some(guard))
}
