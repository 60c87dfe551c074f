use std::path::Path;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tracing::{debug, error, info};

use crate::app::controller::{Screen, ScreenController, SelectOutcome};
use crate::app::notifications::{Notification, ToastQueue};
use crate::app::views::{
    AnalyzingView, Navbar, ResultsView, UiAction, View, WelcomeView, toasts,
};
use crate::classification::ClassificationServiceBuilder;
use crate::config::{Settings, UiSettings};
use crate::error::AppError;
use crate::media::{ImageHandle, SelectedFile};

const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

pub struct AuraLensApp {
    controller: ScreenController,
    toasts: ToastQueue,
    ui_settings: UiSettings,
    shown_preview: Option<String>,
    actions: Vec<UiAction>,
}

impl AuraLensApp {
    pub fn new(controller: ScreenController, settings: &Settings) -> Self {
        Self {
            controller,
            toasts: ToastQueue::new(settings.ui.toast_duration()),
            ui_settings: settings.ui.clone(),
            shown_preview: None,
            actions: Vec::new(),
        }
    }

    pub fn start_gui(settings: &Settings, runtime: Handle) -> Result<(), AppError> {
        let service = ClassificationServiceBuilder::new(&settings.service).build()?;
        let controller = ScreenController::new(service, runtime);
        let app = AuraLensApp::new(controller, settings);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::vec2(
                    settings.ui.window_width,
                    settings.ui.window_height,
                ))
                .with_title("AuraLens AI")
                .with_drag_and_drop(true),
            ..Default::default()
        };

        info!("Starting AuraLens UI");
        eframe::run_native(
            "AuraLens AI",
            options,
            Box::new(move |cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(app))
            }),
        )
        .map_err(|e| AppError::Ui(e.to_string()))
    }

    fn pick_image(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Choose an image to scan")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            self.select_path(&path);
        }
    }

    fn select_path(&mut self, path: &Path) {
        match SelectedFile::from_path(path) {
            Ok(file) => self.select(file),
            Err(err) => {
                error!("{}", err);
                self.controller.notify(Notification::unreadable_image(&err));
            }
        }
    }

    fn select(&mut self, file: SelectedFile) {
        match self.controller.select_image(file) {
            SelectOutcome::Started(scan_id) => debug!("Scan {} queued from UI", scan_id),
            SelectOutcome::NotAnImage | SelectOutcome::Busy => {}
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(bytes) = file.bytes {
            self.select(SelectedFile::from_bytes(file.name, bytes));
        } else if let Some(path) = file.path {
            self.select_path(&path);
        }
    }

    fn dispatch(&mut self) {
        for action in std::mem::take(&mut self.actions) {
            debug!("UI action: {:?}", action);
            match action {
                UiAction::PickImage => self.pick_image(),
                UiAction::ViewHistory => self.controller.view_history(),
                UiAction::CancelScan | UiAction::NewScan => self.controller.start_new_scan(),
                UiAction::Back => self.controller.go_back(),
                UiAction::SaveToHistory => self.controller.save_to_history(),
            }
        }
    }

    /// Evicts the decoded preview of an image the controller no longer holds.
    fn release_stale_preview(&mut self, ctx: &egui::Context) {
        let current = self.controller.image().map(ImageHandle::preview_uri);
        if self.shown_preview == current {
            return;
        }
        if let Some(stale) = self.shown_preview.take() {
            ctx.forget_image(&stale);
            debug!("Evicted preview {}", stale);
        }
        self.shown_preview = current;
    }

    fn draw_screen(&mut self, ui: &mut egui::Ui) {
        let actions = &mut self.actions;
        let controller = &self.controller;
        match (controller.screen(), controller.result()) {
            (Screen::Analyzing, _) => AnalyzingView::new(
                controller.image(),
                controller.scan_elapsed().unwrap_or_default(),
                actions,
            )
            .draw(ui),
            (Screen::Results, Some(result)) => ResultsView::new(
                controller.image(),
                result,
                self.ui_settings.breakdown_limit,
                actions,
            )
            .draw(ui),
            _ => WelcomeView::new(actions).draw(ui),
        }
    }
}

impl eframe::App for AuraLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(8.0);
            Navbar.draw(ui);
            ui.add_space(8.0);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.draw_screen(ui));
        });

        self.dispatch();
        self.release_stale_preview(ctx);

        let now = Instant::now();
        for notification in self.controller.take_notifications() {
            self.toasts.push(notification, now);
        }
        self.toasts.expire(now);
        toasts::show(ctx, &mut self.toasts);

        if self.controller.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
