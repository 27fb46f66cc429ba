// Named key predicates so handlers talk about actions, not raw `KeyCode`s.
// Each one consults the runtime table, which settings may have rebound.

use crate::app::settings::runtime_keybinds;
use crate::input::KeyCode;

fn is_bound(action: &str, code: &KeyCode) -> bool {
	runtime_keybinds::get().is_bound(action, code)
}

pub fn is_quit(code: &KeyCode) -> bool {
	is_bound("quit", code)
}

pub fn is_add(code: &KeyCode) -> bool {
	is_bound("add", code)
}

pub fn is_remove(code: &KeyCode) -> bool {
	is_bound("remove", code)
}

pub fn is_sort_name(code: &KeyCode) -> bool {
	is_bound("sort_name", code)
}

pub fn is_sort_team(code: &KeyCode) -> bool {
	is_bound("sort_team", code)
}

pub fn is_down(code: &KeyCode) -> bool {
	is_bound("down", code)
}

pub fn is_up(code: &KeyCode) -> bool {
	is_bound("up", code)
}

pub fn is_page_down(code: &KeyCode) -> bool {
	is_bound("page_down", code)
}

pub fn is_page_up(code: &KeyCode) -> bool {
	is_bound("page_up", code)
}

pub fn is_enter(code: &KeyCode) -> bool {
	is_bound("enter", code)
}

pub fn is_esc(code: &KeyCode) -> bool {
	is_bound("esc", code)
}
