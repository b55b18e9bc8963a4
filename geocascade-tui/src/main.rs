//! GeoCascade TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config and background fetches (`backend/`)
//!
//! The main loop is synchronous; location fetches run as tokio tasks and
//! report back through an unbounded channel drained each frame.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;

use geocascade_core::LocationService;
use geocascade_source::create_source;

use backend::Fetcher;
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Config decides which location source to use
    let config = backend::load_config()?;
    let service = LocationService::new(create_source(config.source));

    // 2. Runtime for background fetches, channel for their results
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let fetcher = Fetcher::new(runtime.handle().clone(), tx, service);

    // 3. Terminal and application state
    let mut terminal = init_terminal()?;
    let mut app = model::App::new();

    // 4. Main loop
    let result = app::run(&mut terminal, &mut app, &fetcher, &mut rx);

    // 5. Restore the terminal whether the loop succeeded or not
    restore_terminal(&mut terminal)?;

    result
}
