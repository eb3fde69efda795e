//! # Confirmation Modal
//!
//! Shown while the selector is `Confirming`. A dimmed backdrop covers the
//! screen and swallows clicks, so the only ways out are OK and Cancel.

use eframe::egui;
use shared::{AttendancePanel, AttendanceView};

use crate::ui::components::attendance_panel::render_event_details;
use crate::ui::components::styling::{colors, filled_button};
use crate::ui::state::AttendanceAction;

pub fn render_confirmation_modal(
    ctx: &egui::Context,
    view: &AttendanceView,
    actions: &mut Vec<AttendanceAction>,
) {
    let AttendancePanel::ConfirmationDialog { heading, details } = &view.panel else {
        return;
    };

    let screen_rect = ctx.screen_rect();

    egui::Area::new(egui::Id::new("attendance_confirmation_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen_rect.min)
        .show(ctx, |ui| {
            ui.painter().rect_filled(screen_rect, egui::Rounding::ZERO, colors::BACKDROP);
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    egui::Area::new(egui::Id::new("attendance_confirmation_dialog"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::WHITE)
                .rounding(egui::Rounding::same(16.0))
                .inner_margin(egui::Margin::same(20.0))
                .shadow(egui::epaint::Shadow {
                    offset: egui::vec2(0.0, 4.0),
                    blur: 16.0,
                    spread: 0.0,
                    color: egui::Color32::from_black_alpha(60),
                })
                .show(ui, |ui| {
                    ui.set_width(320.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("🎉").size(32.0));
                        ui.heading(egui::RichText::new(heading).color(colors::HEADER_TEXT));
                    });
                    ui.add_space(8.0);
                    render_event_details(ui, details);
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        let ok = filled_button("OK", colors::DIALOG_OK, egui::Color32::WHITE);
                        if ui.add(ok).clicked() {
                            actions.push(AttendanceAction::ConfirmOk);
                        }
                        let cancel =
                            filled_button("Cancel", colors::DIALOG_CANCEL, egui::Color32::WHITE);
                        if ui.add(cancel).clicked() {
                            actions.push(AttendanceAction::ConfirmCancel);
                        }
                    });
                });
        });
}
