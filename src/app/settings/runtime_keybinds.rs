//! Key bindings in effect for the running screen.
//!
//! Defaults are built in; `Settings::keybinds` may replace the keys of any
//! action. The active table is a process-wide value so the small predicates
//! in `keybinds` can be called from anywhere without threading it through.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use once_cell::sync::Lazy;

use super::SettingsError;
use crate::input::KeyCode;

const DEFAULTS: &[(&str, &[&str])] = &[
    ("quit", &["q", "esc"]),
    ("add", &["+", "a"]),
    ("remove", &["-", "d"]),
    ("sort_name", &["s"]),
    ("sort_team", &["t"]),
    ("down", &["down", "j"]),
    ("up", &["up", "k"]),
    ("page_down", &["pagedown"]),
    ("page_up", &["pageup"]),
    ("enter", &["enter"]),
    ("esc", &["esc"]),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keybinds {
    map: HashMap<String, Vec<KeyCode>>,
}

impl Default for Keybinds {
    fn default() -> Self {
        let map = DEFAULTS
            .iter()
            .map(|(action, keys)| {
                let codes = keys.iter().filter_map(|k| parse_key(k)).collect();
                (action.to_string(), codes)
            })
            .collect();
        Keybinds { map }
    }
}

impl Keybinds {
    /// Defaults with the actions named in `overrides` rebound.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Result<Self, SettingsError> {
        let mut binds = Keybinds::default();
        for (action, specs) in overrides {
            let codes = specs
                .iter()
                .map(|spec| {
                    parse_key(spec).ok_or_else(|| SettingsError::Keybind {
                        action: action.clone(),
                        spec: spec.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            binds.map.insert(action.clone(), codes);
        }
        Ok(binds)
    }

    pub fn is_bound(&self, action: &str, code: &KeyCode) -> bool {
        self.map.get(action).is_some_and(|codes| codes.contains(code))
    }

    /// Keys bound to `action`, for the help line.
    pub fn keys_for(&self, action: &str) -> &[KeyCode] {
        self.map.get(action).map_or(&[], Vec::as_slice)
    }
}

/// Parse a key spec such as `q`, `+`, `esc`, `pagedown` or `f5`.
pub fn parse_key(spec: &str) -> Option<KeyCode> {
    let mut chars = spec.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    let lower = spec.to_ascii_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        f if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => return None,
    };
    Some(code)
}

static RUNTIME: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::default()));

/// Bindings currently in effect.
pub fn get() -> RwLockReadGuard<'static, Keybinds> {
    RUNTIME.read().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the bindings in effect.
pub fn set(binds: Keybinds) {
    *RUNTIME.write().unwrap_or_else(PoisonError::into_inner) = binds;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_char_keys() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("+"), Some(KeyCode::Char('+')));
        assert_eq!(parse_key("PageDown"), Some(KeyCode::PageDown));
        assert_eq!(parse_key("f5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key("fx"), None);
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn overrides_replace_only_named_actions() {
        let mut o = BTreeMap::new();
        o.insert("add".to_string(), vec!["i".to_string()]);
        let b = Keybinds::with_overrides(&o).expect("valid");
        assert!(b.is_bound("add", &KeyCode::Char('i')));
        assert!(!b.is_bound("add", &KeyCode::Char('+')));
        assert!(b.is_bound("remove", &KeyCode::Char('-')));
    }

    #[test]
    fn bad_override_is_reported() {
        let mut o = BTreeMap::new();
        o.insert("add".to_string(), vec!["hyper-space".to_string()]);
        assert!(matches!(
            Keybinds::with_overrides(&o),
            Err(SettingsError::Keybind { .. })
        ));
    }
}
