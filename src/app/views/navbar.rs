use egui::RichText;

use crate::app::views::{PRIMARY, View};

pub struct Navbar;

impl View for Navbar {
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("AuraLens AI").size(30.0).strong().color(PRIMARY));
        });
    }
}
