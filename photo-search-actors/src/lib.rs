pub mod image_loader_actor;
pub mod search_actor;
pub mod share;
pub mod share_actor;

pub use image_loader_actor::{ImageLoaderActor, LoadFullImageMessage};
pub use search_actor::{SearchActor, SearchMessage};
pub use share_actor::{ShareActor, ShareMessage};

use photo_search_core::AppMessage;
use tokio::sync::mpsc::UnboundedSender;

/// Delivers results to the UI thread and wakes the event loop so they are
/// drawn without waiting for input. Once the UI has shut down, sends are
/// dropped.
#[derive(Clone)]
pub struct AppMessageSender {
    tx_app_message: UnboundedSender<AppMessage>,
    egui_ctx: egui::Context,
}

impl AppMessageSender {
    pub fn new(tx_app_message: UnboundedSender<AppMessage>, egui_ctx: egui::Context) -> Self {
        Self {
            tx_app_message,
            egui_ctx,
        }
    }

    pub fn send(&self, message: AppMessage) {
        if self.tx_app_message.send(message).is_err() {
            tracing::warn!("UI is gone, dropping message");
            return;
        }
        self.egui_ctx.request_repaint();
    }
}
