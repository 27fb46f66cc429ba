use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::model::Team;
use crate::ui::Theme;

/// Concrete styles derived from the active [`Theme`].
#[derive(Clone, Debug)]
pub struct Colors {
	pub list_block_style: Style,
	pub selected_style: Style,
	pub section_header_style: Style,
	pub fresh_style: Style,
	pub title_style: Style,
	pub footer_style: Style,
	pub message_style: Style,
	pub theme: Theme,
}

impl Colors {
	/// Style of the `●` marker for `team`.
	pub fn team_style(&self, team: Team) -> Style {
		Style::default().fg(self.theme.team_color(team))
	}
}

fn derive(theme: &Theme) -> Colors {
	Colors {
		list_block_style: Style::default().fg(theme.fg).bg(theme.bg),
		selected_style: Style::default().fg(theme.bg).bg(theme.accent),
		section_header_style: Style::default()
			.fg(theme.fg)
			.bg(theme.header_bg)
			.add_modifier(Modifier::BOLD),
		fresh_style: Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
		title_style: Style::default().fg(theme.accent).bg(theme.bg),
		footer_style: Style::default().fg(theme.fg).bg(theme.bg),
		message_style: Style::default().fg(theme.fg).bg(theme.header_bg),
		theme: theme.clone(),
	}
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

/// Select a theme by name (`dark`, `light`) or by path to a theme TOML file.
/// Unknown names keep the current theme.
pub fn set_theme(name: &str) {
	if let Some(theme) = Theme::named(name) {
		set_from_theme(&theme);
		return;
	}
	let path = Path::new(name);
	match std::fs::read_to_string(path) {
		Ok(text) => match Theme::from_toml(&text) {
			Ok(theme) => set_from_theme(&theme),
			Err(e) => tracing::warn!("invalid theme file {}: {}", path.display(), e),
		},
		Err(e) => tracing::warn!("unknown theme `{}`: {}", name, e),
	}
}

/// Derive concrete runtime styles from the provided theme and store them.
pub fn set_from_theme(theme: &Theme) {
	*CURRENT.lock().unwrap_or_else(PoisonError::into_inner) = derive(theme);
}

pub fn current() -> Colors {
	CURRENT.lock().unwrap_or_else(PoisonError::into_inner).clone()
}
