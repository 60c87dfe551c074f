use egui::{RichText, vec2};

use crate::app::views::classification_orb::ClassificationOrb;
use crate::app::views::{MUTED, PRIMARY, SECONDARY, UiAction, View, preview};
use crate::classification::{BreakdownEntry, ClassificationResult, format_percent};
use crate::media::ImageHandle;

pub struct ResultsView<'a> {
    image: Option<&'a ImageHandle>,
    result: &'a ClassificationResult,
    breakdown_limit: usize,
    actions: &'a mut Vec<UiAction>,
}

impl<'a> ResultsView<'a> {
    pub fn new(
        image: Option<&'a ImageHandle>,
        result: &'a ClassificationResult,
        breakdown_limit: usize,
        actions: &'a mut Vec<UiAction>,
    ) -> Self {
        Self {
            image,
            result,
            breakdown_limit,
            actions,
        }
    }

    fn draw_summary(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(RichText::new("←").size(20.0)).clicked() {
                self.actions.push(UiAction::Back);
            }
            if let Some(image) = self.image {
                ui.add(preview(image, vec2(64.0, 64.0)));
            }
            ui.vertical(|ui| {
                ui.label(RichText::new("Analysis Complete").strong().color(MUTED));
                if let Some(image) = self.image {
                    ui.label(RichText::new(image.name()).small().color(MUTED));
                }
            });
        });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ClassificationOrb::new(self.result.certainty())
                .size(300.0)
                .draw(ui);
            ui.add_space(16.0);
            ui.label(RichText::new(&self.result.prediction).size(40.0).strong());
            ui.label(
                RichText::new(certainty_label(self.result))
                    .size(16.0)
                    .color(PRIMARY),
            );

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("New Scan").size(16.0)).clicked() {
                    self.actions.push(UiAction::NewScan);
                }
                if ui
                    .button(RichText::new("Save to History").size(16.0))
                    .clicked()
                {
                    self.actions.push(UiAction::SaveToHistory);
                }
            });
        });
    }

    fn draw_breakdown(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("CLASSIFICATION BREAKDOWN")
                    .size(18.0)
                    .strong()
                    .color(MUTED),
            );
            ui.add_space(12.0);

            let entries = self.result.breakdown(self.breakdown_limit);
            if entries.is_empty() {
                ui.label(RichText::new("No breakdown available").color(MUTED));
            }
            for (i, entry) in entries.iter().enumerate() {
                draw_entry(ui, entry, i == 0);
                ui.add_space(10.0);
            }
        });
    }
}

fn draw_entry(ui: &mut egui::Ui, entry: &BreakdownEntry, top: bool) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(&entry.label).size(20.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format_percent(entry.confidence))
                    .size(18.0)
                    .color(MUTED),
            );
        });
    });
    ui.add(
        egui::ProgressBar::new(entry.certainty())
            .desired_height(12.0)
            .fill(if top { PRIMARY } else { SECONDARY }),
    );
}

pub fn certainty_label(result: &ClassificationResult) -> String {
    format!("{} Certainty", format_percent(result.confidence))
}

impl View for ResultsView<'_> {
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.columns(2, |columns| {
            self.draw_summary(&mut columns[0]);
            self.draw_breakdown(&mut columns[1]);
        });
    }
}
