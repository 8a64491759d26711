//! The searches as sections of square thumbnails. The expanded photo takes a
//! row of its own, sized to its aspect ratio.

use crate::texture_store::TextureStore;
use eframe::egui;
use photo_search_core::{layout::fit_aspect, Effect, Gallery, ImageKind, IndexPath, Size};

const SELECTION_BORDER: f32 = 10.0;

/// Carried by egui's drag and drop while a cell is being moved.
struct DraggedPhoto {
    from: IndexPath,
    texture: egui::TextureHandle,
}

#[derive(Default)]
pub struct PhotoGrid {
    scroll_target: Option<IndexPath>,
}

impl PhotoGrid {
    pub fn scroll_to(&mut self, position: IndexPath) {
        self.scroll_target = Some(position);
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        gallery: &mut Gallery,
        textures: &mut TextureStore,
        effects: &mut Vec<Effect>,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if gallery.number_of_sections() == 0 {
                ui.centered_and_justified(|ui| {
                    ui.label("Type a search term and press Enter");
                });
                return;
            }

            let available = Size::new(ui.available_width(), ui.available_height());
            let spacing = gallery.layout().spacing();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
                    for section in 0..gallery.number_of_sections() {
                        self.show_section(ui, section, available, gallery, textures, effects);
                    }
                });
        });

        paint_drag_preview(ctx);
    }

    fn show_section(
        &mut self,
        ui: &mut egui::Ui,
        section: usize,
        available: Size,
        gallery: &mut Gallery,
        textures: &mut TextureStore,
        effects: &mut Vec<Effect>,
    ) {
        let insets = gallery.layout().section_insets;
        ui.add_space(insets.top);
        if let Some(search) = gallery.searches().get(section) {
            let term = search.term.clone();
            ui.horizontal(|ui| {
                ui.add_space(insets.left);
                ui.heading(term);
            });
        }

        let expanded = gallery
            .expanded_position()
            .filter(|position| position.section == section)
            .map(|position| position.item);
        let rows = row_layout(
            gallery.number_of_items(section),
            gallery.layout().items_per_row as usize,
            expanded,
        );
        for row in rows {
            ui.horizontal(|ui| {
                ui.add_space(insets.left);
                for item in row {
                    let position = IndexPath::new(section, item);
                    self.show_cell(ui, position, available, gallery, textures, effects);
                }
            });
        }
        ui.add_space(insets.bottom);
    }

    fn show_cell(
        &mut self,
        ui: &mut egui::Ui,
        position: IndexPath,
        available: Size,
        gallery: &mut Gallery,
        textures: &mut TextureStore,
        effects: &mut Vec<Effect>,
    ) {
        let Some((cell, effect)) = gallery.cell_for_item(position) else {
            return;
        };
        effects.extend(effect);

        let size = gallery.item_size(position, available);
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(size.width, size.height),
            egui::Sense::click_and_drag(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
            match textures.texture_for(ui.ctx(), &cell) {
                Some(texture) => {
                    let [width, height] = texture.size();
                    let fitted = fit_aspect(
                        width as u32,
                        height as u32,
                        Size::new(rect.width(), rect.height()),
                    );
                    let image_rect = egui::Rect::from_center_size(
                        rect.center(),
                        egui::vec2(fitted.width, fitted.height),
                    );
                    painter.image(texture.id(), image_rect, full_uv(), egui::Color32::WHITE);
                }
                None => {
                    ui.put(rect, egui::Spinner::new());
                }
            }
            if cell.selected {
                painter.rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(SELECTION_BORDER, ui.visuals().selection.bg_fill),
                    egui::StrokeKind::Inside,
                );
            }
            if response.dnd_hover_payload::<DraggedPhoto>().is_some() {
                painter.rect_stroke(
                    rect,
                    0.0,
                    ui.visuals().widgets.hovered.fg_stroke,
                    egui::StrokeKind::Inside,
                );
            }
        }

        let response = response.on_hover_text(cell.photo.title());

        if response.clicked() {
            effects.extend(gallery.tap(position));
        }

        if let Some(image) = gallery.drag_payload(position) {
            let texture =
                textures.texture(ui.ctx(), cell.photo.id(), ImageKind::Thumbnail, &image);
            response.dnd_set_drag_payload(DraggedPhoto {
                from: position,
                texture,
            });
        }

        if let Some(dragged) = response.dnd_release_payload::<DraggedPhoto>() {
            match gallery.move_item(dragged.from, position) {
                Ok(move_effects) => effects.extend(move_effects),
                Err(e) => tracing::warn!("Could not move photo: {}", e),
            }
        }

        if self.scroll_target == Some(position) {
            response.scroll_to_me(Some(egui::Align::Center));
            self.scroll_target = None;
        }
    }
}

/// Splits a section's items into rows. The expanded item, if any, is put on
/// a row of its own.
fn row_layout(items: usize, items_per_row: usize, expanded: Option<usize>) -> Vec<Vec<usize>> {
    let items_per_row = items_per_row.max(1);
    let mut rows = Vec::new();
    let mut row = Vec::with_capacity(items_per_row);
    for item in 0..items {
        if Some(item) == expanded {
            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
            }
            rows.push(vec![item]);
            continue;
        }
        row.push(item);
        if row.len() == items_per_row {
            rows.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

fn paint_drag_preview(ctx: &egui::Context) {
    let Some(dragged) = egui::DragAndDrop::payload::<DraggedPhoto>(ctx) else {
        return;
    };
    let Some(pointer) = ctx.pointer_interact_pos() else {
        return;
    };
    let [width, height] = dragged.texture.size();
    let preview = fit_aspect(width as u32, height as u32, Size::new(96.0, 96.0));
    let rect = egui::Rect::from_center_size(pointer, egui::vec2(preview.width, preview.height));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("photo_drag_preview"),
    ));
    painter.image(
        dragged.texture.id(),
        rect,
        full_uv(),
        egui::Color32::from_white_alpha(200),
    );
}
