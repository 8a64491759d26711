use eframe::egui;
use photo_search_core::{Effect, Gallery};

#[derive(Default)]
pub struct TopPanel {
    search_text: String,
}

impl TopPanel {
    pub fn show(&mut self, ctx: &egui::Context, gallery: &mut Gallery, effects: &mut Vec<Effect>) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_text)
                        .hint_text("Search Flickr")
                        .desired_width(240.0),
                );
                // Enter makes the field lose focus, which also dismisses it.
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    effects.extend(gallery.submit_search(&mut self.search_text));
                }

                if gallery.is_busy() {
                    ui.spinner();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.show_share_controls(ui, gallery, effects);
                });
            });
        });
    }

    fn show_share_controls(
        &self,
        ui: &mut egui::Ui,
        gallery: &mut Gallery,
        effects: &mut Vec<Effect>,
    ) {
        let button = egui::Button::new(if gallery.is_sharing() { "📤 Done" } else { "📤 Share" });
        if ui
            .add_enabled(
                !gallery.searches().is_empty() && !gallery.is_share_in_flight(),
                button,
            )
            .clicked()
        {
            effects.extend(gallery.share_tapped());
        }

        if let Some(label) = gallery.selection_label() {
            ui.label(
                egui::RichText::new(label)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .italics(),
            );
        }
    }
}
