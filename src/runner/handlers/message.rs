use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Keys while a message box is open: Enter or Esc dismiss it.
pub fn handle_message(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_enter(&code) || keybinds::is_esc(&code) {
        app.mode = Mode::Normal;
    }
    Ok(false)
}
