use egui::{Align2, Color32, RichText, vec2};

use crate::app::notifications::{Severity, ToastQueue};
use crate::app::views::MUTED;

const DESTRUCTIVE: Color32 = Color32::from_rgb(239, 68, 68);

/// Bottom-right toast stack. Clicking a toast dismisses it.
pub fn show(ctx: &egui::Context, queue: &mut ToastQueue) {
    if queue.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("auralens_toasts"))
        .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for (i, toast) in queue.iter().enumerate() {
                let title_color = match toast.notification.severity {
                    Severity::Info => ui.visuals().strong_text_color(),
                    Severity::Destructive => DESTRUCTIVE,
                };
                let response = egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.label(RichText::new(&toast.notification.title).strong().color(title_color));
                        ui.label(RichText::new(&toast.notification.description).color(MUTED));
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    dismissed = Some(i);
                }
                ui.add_space(8.0);
            }
        });

    if let Some(i) = dismissed {
        queue.dismiss(i);
    }
    ctx.request_repaint_after(std::time::Duration::from_millis(250));
}
