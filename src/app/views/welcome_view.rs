use egui::{RichText, vec2};

use crate::app::views::{MUTED, PRIMARY, SECONDARY, UiAction, View};

const FEATURES: [(&str, &str); 3] = [
    (
        "Instant Analysis",
        "Get results in seconds with our advanced AI engine",
    ),
    (
        "Precision Insights",
        "Detailed classification with confidence scores",
    ),
    (
        "Secure & Private",
        "Your images are processed securely and privately",
    ),
];

pub struct WelcomeView<'a> {
    actions: &'a mut Vec<UiAction>,
}

impl<'a> WelcomeView<'a> {
    pub fn new(actions: &'a mut Vec<UiAction>) -> Self {
        Self { actions }
    }

    fn draw_uploader(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("AuraLens AI").size(56.0).strong().color(PRIMARY));
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Unlock the hidden essence of any image with cutting-edge AI classification technology",
                )
                .color(MUTED),
            );
            ui.add_space(32.0);

            let scan = egui::Button::new(
                RichText::new("Tap to Scan Image\nUpload or drop a photo").size(22.0),
            )
            .min_size(vec2(320.0, 160.0));
            if ui.add(scan).clicked() {
                self.actions.push(UiAction::PickImage);
            }

            ui.add_space(24.0);
            if ui.button(RichText::new("View History").size(16.0)).clicked() {
                self.actions.push(UiAction::ViewHistory);
            }
        });
    }

    fn draw_features(&self, ui: &mut egui::Ui) {
        for (i, (title, description)) in FEATURES.iter().enumerate() {
            let accent = if i % 2 == 0 { PRIMARY } else { SECONDARY };
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(*title).size(22.0).strong().color(accent));
                ui.label(RichText::new(*description).size(15.0));
            });
            ui.add_space(16.0);
        }
    }
}

impl View for WelcomeView<'_> {
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.columns(2, |columns| {
            self.draw_uploader(&mut columns[0]);
            self.draw_features(&mut columns[1]);
        });

        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Powered by advanced AI • Instant results")
                    .small()
                    .color(MUTED),
            );
        });
    }
}
