//! Terminal input, reduced to the events the screen reacts to.

pub mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // some terminals also report releases and repeats; only presses act
            Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Call after `poll` returned `true`.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
