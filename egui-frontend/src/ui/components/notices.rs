use eframe::egui;

use crate::ui::components::styling::colors;
use crate::ui::state::NoticeState;

/// Stack the active toasts at the bottom of the window. Click to dismiss.
pub fn render_notices(ctx: &egui::Context, notices: &mut NoticeState) {
    if notices.is_empty() {
        return;
    }

    let mut dismissed = Vec::new();

    egui::Area::new(egui::Id::new("attendance_notices"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .interactable(true)
        .show(ctx, |ui| {
            for toast in notices.toasts() {
                let response = egui::Frame::none()
                    .fill(colors::TOAST_BACKGROUND)
                    .rounding(egui::Rounding::same(10.0))
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&toast.message).color(colors::TOAST_TEXT));
                    })
                    .response
                    .interact(egui::Sense::click());

                if response.clicked() {
                    dismissed.push(toast.id);
                }
            }
        });

    for id in dismissed {
        notices.dismiss(id);
    }
}
