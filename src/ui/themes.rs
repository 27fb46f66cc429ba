use ratatui::style::Color;
use serde::Deserialize;

use crate::model::Team;

/// Base palette plus one colour per team marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub header_bg: Color,
    pub blue: Color,
    pub green: Color,
    pub red: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    header_bg: Option<String>,
}

#[derive(Deserialize, Default)]
struct Teams {
    blue: Option<String>,
    green: Option<String>,
    red: Option<String>,
}

#[derive(Deserialize)]
struct ThemeFile {
    palette: Option<Pal>,
    #[serde(default)]
    teams: Teams,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            header_bg: Color::DarkGray,
            blue: Color::Blue,
            green: Color::Green,
            red: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            header_bg: Color::Gray,
            blue: Color::Blue,
            green: Color::Green,
            red: Color::Red,
        }
    }

    /// Built-in theme by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Marker colour for `team`.
    pub fn team_color(&self, team: Team) -> Color {
        match team {
            Team::Blue => self.blue,
            Team::Green => self.green,
            Team::Red => self.red,
        }
    }

    /// Parse a theme file. Missing entries fall back to the dark theme;
    /// colours are `#rrggbb`.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let file: ThemeFile = toml::from_str(s)?;
        let mut theme = Self::dark();
        if let Some(p) = file.palette {
            theme.bg = parse_hex(&p.bg);
            theme.fg = parse_hex(&p.fg);
            theme.accent = parse_hex(&p.accent);
            if let Some(h) = p.header_bg {
                theme.header_bg = parse_hex(&h);
            }
        }
        for (slot, value) in [
            (&mut theme.blue, file.teams.blue),
            (&mut theme.green, file.teams.green),
            (&mut theme.red, file.teams.red),
        ] {
            if let Some(v) = value {
                *slot = parse_hex(&v);
            }
        }
        Ok(theme)
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 && s.is_ascii() {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}
