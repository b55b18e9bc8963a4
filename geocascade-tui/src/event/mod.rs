//! Event layer
//!
//! Translates raw terminal events into messages for the update layer.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
