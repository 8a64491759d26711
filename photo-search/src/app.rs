use crate::dispatch::{self, Actors};
use eframe::egui;
use photo_search_core::{AppMessage, Effect, Gallery};
use photo_search_ui::Ui;

pub(crate) struct App {
    pub rx_app_message: tokio::sync::mpsc::UnboundedReceiver<AppMessage>,
    pub actors: Actors,
    pub gallery: Gallery,
    pub ui: Ui,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages(ctx);
        let effects = self.ui.update(ctx, &mut self.gallery);
        self.dispatch(ctx, effects);
    }
}

impl App {
    fn process_messages(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.rx_app_message.try_recv() {
            let effects = match message {
                AppMessage::SearchCompleted(result) => self.gallery.search_completed(result),
                AppMessage::FullImageLoaded {
                    photo_id,
                    position,
                    result,
                } => self.gallery.full_image_loaded(photo_id, position, result),
                AppMessage::ShareCompleted(result) => {
                    match result {
                        Ok(folder) => tracing::info!("Shared photos exported to {:?}", folder),
                        Err(e) => tracing::error!("Could not share photos: {}", e),
                    }
                    self.gallery.share_completed()
                }
            };
            self.dispatch(ctx, effects);
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, effects: Vec<Effect>) {
        let work = dispatch::dispatch(&mut self.gallery, &self.actors, effects);
        if let Some(position) = work.scroll_to {
            self.ui.scroll_to(position);
        }
        if work.repaint {
            ctx.request_repaint();
        }
    }
}
