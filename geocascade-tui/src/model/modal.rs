//! Modal state

/// Active modal dialog.
#[derive(Debug, Clone)]
pub enum Modal {
    /// Free-text input for the zone escape hatch.
    ManualZone { input: String },
}

/// Modal container, at most one open at a time.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn open_manual_zone(&mut self) {
        self.active = Some(Modal::ManualZone {
            input: String::new(),
        });
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
