//! Model layer: application state

mod app;
mod focus;
mod modal;

pub use app::App;
pub use focus::FocusField;
pub use modal::{Modal, ModalState};
