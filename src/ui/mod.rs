use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, Mode};

pub mod colors;
pub mod footer;
pub mod header;
pub mod message;
pub mod section_list;
pub mod themes;

pub use themes::Theme;

/// Draw the whole screen: title bar, sectioned list, footer, and the
/// message box when one is open.
pub fn ui(f: &mut Frame, app: &App) {
    // title (1), list (min), footer (3)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    header::render(f, chunks[0], app);
    section_list::render(f, chunks[1], app);
    footer::render(f, chunks[2]);

    if let Mode::Message { title, content } = &app.mode {
        message::render(f, f.area(), title, content);
    }
}
