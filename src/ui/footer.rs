use ratatui::{layout::Rect, widgets::{Block, Borders, Paragraph}, Frame};

use crate::app::settings::runtime_keybinds;
use crate::input::KeyCode;
use crate::ui::colors::current as current_colors;

const HELP: &[(&str, &str)] = &[
    ("quit", "quit"),
    ("add", "add"),
    ("remove", "remove"),
    ("sort_name", "sort name"),
    ("sort_team", "by team"),
    ("down", "down"),
    ("up", "up"),
];

fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

/// Help text built from the bindings in effect, e.g. `+/a:add`.
pub fn help_line() -> String {
    let binds = runtime_keybinds::get();
    HELP.iter()
        .filter_map(|(action, label)| {
            let keys = binds.keys_for(action);
            if keys.is_empty() {
                return None;
            }
            let keys: Vec<String> = keys.iter().map(key_label).collect();
            Some(format!("{}:{}", keys.join("/"), label))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let p = Paragraph::new(help_line()).block(Block::default().borders(Borders::ALL).style(colors.footer_style));
    f.render_widget(p, area);
}
