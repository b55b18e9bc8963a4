//! Background fetch dispatch
//!
//! The ratatui loop is synchronous, so fetches run as tokio tasks on the
//! runtime owned by `main`. Results come back through the message channel
//! the loop drains each iteration. Responses are applied in arrival order
//! with no staleness guard; the cascade's last-write-wins handling covers
//! out-of-order completions.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use geocascade_core::{LoadRequest, LocationService};

use crate::message::{AppMessage, LoadResult};

/// Dispatches location fetches onto the async runtime.
pub struct Fetcher {
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
    service: Arc<LocationService>,
}

impl Fetcher {
    #[must_use]
    pub fn new(handle: Handle, tx: UnboundedSender<AppMessage>, service: LocationService) -> Self {
        Self {
            handle,
            tx,
            service: Arc::new(service),
        }
    }

    /// Fetch the country list.
    pub fn load_countries(&self) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let options = service.load_countries().await;
            // Send fails only when the UI already shut down
            let _ = tx.send(AppMessage::Loaded(LoadResult::Countries(options)));
        });
    }

    /// Fetch whatever a selection change asked for.
    pub fn dispatch(&self, request: LoadRequest) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = match request {
                LoadRequest::Regions { country } => {
                    LoadResult::Regions(service.load_regions(&country).await)
                }
                LoadRequest::Cities { country, region } => {
                    LoadResult::Cities(service.load_cities(&country, &region).await)
                }
            };
            let _ = tx.send(AppMessage::Loaded(result));
        });
    }
}
