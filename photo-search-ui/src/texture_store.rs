use eframe::egui;
use photo_search_core::{Cell, ImageKind, PhotoId, PhotoImage};
use std::collections;

/// GPU textures for cached photos. Images in the gallery cache never change
/// once written, so a texture is uploaded once per photo and kind.
#[derive(Default)]
pub struct TextureStore {
    hash_map: collections::HashMap<(PhotoId, ImageKind), egui::TextureHandle>,
}

impl TextureStore {
    pub fn texture_for(
        &mut self,
        ctx: &egui::Context,
        cell: &Cell,
    ) -> Option<egui::TextureHandle> {
        let image = cell.image.as_ref()?;
        Some(self.texture(ctx, cell.photo.id(), cell.image_kind, image))
    }

    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        photo_id: &PhotoId,
        kind: ImageKind,
        image: &PhotoImage,
    ) -> egui::TextureHandle {
        self.hash_map
            .entry((photo_id.clone(), kind))
            .or_insert_with(|| upload(ctx, photo_id, kind, image))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.hash_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash_map.is_empty()
    }
}

fn upload(
    ctx: &egui::Context,
    photo_id: &PhotoId,
    kind: ImageKind,
    image: &PhotoImage,
) -> egui::TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    let options = match kind {
        ImageKind::Thumbnail => egui::TextureOptions::LINEAR,
        ImageKind::Full => egui::TextureOptions::default(),
    };
    tracing::debug!("Uploading {:?} texture for photo {}", kind, photo_id);
    ctx.load_texture(format!("photo-{}-{:?}", photo_id, kind), color_image, options)
}
