//! Application main loop
//!
//! Each iteration drains completed fetches from the message channel,
//! redraws, then waits up to 100ms for input. Fetches themselves run on
//! the tokio runtime owned by `main`; the loop stays synchronous.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Fetcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    fetcher: &Fetcher,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    // Kick off the startup country fetch
    app.cascade.begin_countries_load();
    fetcher.load_countries();

    loop {
        // 1. Apply any fetch results that arrived since the last frame
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg, fetcher);
        }

        // 2. Render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. Quit check
        if app.should_quit {
            break;
        }

        // 4. Poll input (100ms timeout keeps fetch results flowing)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg, fetcher);
        }
    }

    Ok(())
}
