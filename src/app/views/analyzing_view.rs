use std::time::Duration;

use egui::{RichText, vec2};

use crate::app::views::{MUTED, SECONDARY, UiAction, View, preview};
use crate::media::ImageHandle;

pub struct AnalyzingView<'a> {
    image: Option<&'a ImageHandle>,
    elapsed: Duration,
    actions: &'a mut Vec<UiAction>,
}

impl<'a> AnalyzingView<'a> {
    pub fn new(
        image: Option<&'a ImageHandle>,
        elapsed: Duration,
        actions: &'a mut Vec<UiAction>,
    ) -> Self {
        Self {
            image,
            elapsed,
            actions,
        }
    }
}

impl View for AnalyzingView<'_> {
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            if let Some(image) = self.image {
                ui.add(preview(image, vec2(420.0, 420.0)).tint(egui::Color32::from_white_alpha(160)));
                ui.label(RichText::new(image.name()).small().color(MUTED));
            }

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(22.0).color(SECONDARY));
                ui.label(RichText::new("Revealing the Aura").size(26.0).strong());
            });
            ui.label(
                RichText::new("Analyzing visual patterns and classifications...").color(MUTED),
            );
            ui.label(RichText::new(format_elapsed(self.elapsed)).small().color(MUTED));

            ui.add_space(16.0);
            if ui.button("Cancel").clicked() {
                self.actions.push(UiAction::CancelScan);
            }
        });
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}s elapsed", elapsed.as_secs_f32())
}
