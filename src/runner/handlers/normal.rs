use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;

use super::show_error;

/// Keys while the list has focus.
pub fn handle_normal(app: &mut App, code: KeyCode, page_size: usize) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }

    let result = if keybinds::is_add(&code) {
        Some(("Add", app.add().map(|_| ())))
    } else if keybinds::is_remove(&code) {
        Some(("Remove", app.remove_random().map(|_| ())))
    } else if keybinds::is_sort_name(&code) {
        Some(("Sort by name", app.sort_by_name()))
    } else if keybinds::is_sort_team(&code) {
        Some(("Sort by team", app.sort_by_team()))
    } else {
        if keybinds::is_down(&code) {
            app.next(page_size);
        } else if keybinds::is_up(&code) {
            app.previous(page_size);
        } else if keybinds::is_page_down(&code) {
            app.page_down(page_size);
        } else if keybinds::is_page_up(&code) {
            app.page_up(page_size);
        }
        None
    };

    if let Some((what, Err(err))) = result {
        show_error(app, what, &err);
    }
    Ok(false)
}
