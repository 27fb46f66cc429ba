use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, install_panic_hook, restore_terminal};
use crate::ui;

use anyhow::Context;
use std::time::Duration;

/// One frame; also the highlight step.
const FRAME: Duration = Duration::from_millis(100);

/// Rows taken by the header, footer and list borders.
const CHROME_ROWS: usize = 6;

pub fn run_app(mut app: App) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = init_terminal().context("failed to initialise terminal")?;
    tracing::info!(people = app.people.len(), "screen opened");

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal state even when the loop failed.
    restore_terminal(terminal).context("failed to restore terminal")?;
    tracing::info!("screen closed");
    result
}

fn event_loop(terminal: &mut crate::runner::terminal::Term, app: &mut App) -> anyhow::Result<()> {
    loop {
        if let Err(err) = app.poll_worker() {
            handlers::show_error(app, "Update", &err);
        }

        terminal.draw(|f| ui::ui(f, app))?;

        let page_size = (terminal.size()?.height as usize).saturating_sub(CHROME_ROWS);

        if poll(FRAME)? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key, page_size)? {
                        return Ok(());
                    }
                    app.ensure_selection_visible(page_size);
                }
                InputEvent::Resize(_, _) => app.ensure_selection_visible(page_size),
                InputEvent::Other => {}
            }
        } else {
            app.tick();
        }
    }
}
