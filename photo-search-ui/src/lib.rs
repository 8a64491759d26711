pub mod panels;

pub mod texture_store;

pub mod widgets;

use crate::{panels::TopPanel, texture_store::TextureStore, widgets::PhotoGrid};

use eframe::egui;
use photo_search_core::{Effect, Gallery, IndexPath};

pub struct Ui {
    top_panel: TopPanel,
    photo_grid: PhotoGrid,
    textures: TextureStore,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            top_panel: TopPanel::default(),
            photo_grid: PhotoGrid::default(),
            textures: TextureStore::default(),
        }
    }

    /// Draws one frame. User input is applied to `gallery` directly; the
    /// returned effects still have to be carried out by the caller.
    pub fn update(&mut self, ctx: &egui::Context, gallery: &mut Gallery) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.top_panel.show(ctx, gallery, &mut effects);
        self.photo_grid
            .show(ctx, gallery, &mut self.textures, &mut effects);
        effects
    }

    /// Brings the cell at `position` into view on the next frame it is drawn.
    pub fn scroll_to(&mut self, position: IndexPath) {
        self.photo_grid.scroll_to(position);
    }
}
