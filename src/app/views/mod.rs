pub mod analyzing_view;
pub mod classification_orb;
pub mod navbar;
pub mod results_view;
pub mod toasts;
pub mod welcome_view;

use std::sync::Arc;

use egui::Color32;

use crate::media::ImageHandle;

pub use analyzing_view::AnalyzingView;
pub use navbar::Navbar;
pub use results_view::ResultsView;
pub use welcome_view::WelcomeView;

pub const PRIMARY: Color32 = Color32::from_rgb(217, 70, 239);
pub const SECONDARY: Color32 = Color32::from_rgb(34, 211, 238);
pub const MUTED: Color32 = Color32::from_gray(140);

pub trait View {
    fn draw(&mut self, ui: &mut egui::Ui);
}

/// What the user asked for while a view was drawn. The app shell turns these
/// into controller calls after the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    PickImage,
    ViewHistory,
    CancelScan,
    NewScan,
    Back,
    SaveToHistory,
}

pub(crate) fn preview(handle: &ImageHandle, max: egui::Vec2) -> egui::Image<'static> {
    egui::Image::from_bytes(handle.preview_uri(), Arc::clone(handle.bytes()))
        .max_size(max)
        .maintain_aspect_ratio(true)
}
