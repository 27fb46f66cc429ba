//! Key handling, split per mode.

pub mod message;
pub mod normal;

pub use message::handle_message;
pub use normal::handle_normal;

use crate::app::{App, Mode};
use crate::input::keyboard::is_interrupt;
use crate::input::KeyEvent;

/// Top-level key handler. Returns `Ok(true)` when the screen should close.
pub fn handle_key(app: &mut App, key: KeyEvent, page_size: usize) -> anyhow::Result<bool> {
    if is_interrupt(&key) {
        return Ok(true);
    }
    match app.mode {
        Mode::Normal => handle_normal(app, key.code, page_size),
        Mode::Message { .. } => handle_message(app, key.code),
    }
}

/// Replace the mode with an error box describing `err`.
pub(crate) fn show_error(app: &mut App, what: &str, err: &dyn std::error::Error) {
    tracing::warn!("{} failed: {}", what, err);
    app.mode = Mode::Message {
        title: "Error".to_string(),
        content: format!("{} failed: {}", what, err),
    };
}
