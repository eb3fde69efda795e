//! Panel under the calendar: the prompt, the event card with Attend / Cancel,
//! or the confirmed banner.

use eframe::egui;
use shared::{AttendancePanel, AttendanceView, EventDetails};

use crate::ui::components::styling::{card_frame, colors, filled_button};
use crate::ui::state::AttendanceAction;

pub fn render_attendance_panel(
    ui: &mut egui::Ui,
    view: &AttendanceView,
    actions: &mut Vec<AttendanceAction>,
) {
    card_frame(colors::PANEL_BACKGROUND).show(ui, |ui| {
        ui.set_width(ui.available_width());

        match &view.panel {
            AttendancePanel::Prompt { message } => {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(message).italics().color(colors::WEEKDAY_TEXT));
                });
            }
            AttendancePanel::EventDetails(details) => {
                render_event_details(ui, details);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let attend =
                        filled_button("Attend", colors::ATTEND_BUTTON, colors::ATTEND_TEXT);
                    if ui.add(attend).clicked() {
                        actions.push(AttendanceAction::Attend);
                    }
                    let cancel =
                        filled_button("Cancel", colors::CANCEL_BUTTON, egui::Color32::WHITE);
                    if ui.add(cancel).clicked() {
                        actions.push(AttendanceAction::CancelSelection);
                    }
                });
            }
            // The dialog itself is drawn by the modal; keep the card visible underneath
            AttendancePanel::ConfirmationDialog { details, .. } => {
                render_event_details(ui, details);
            }
            AttendancePanel::ConfirmedBanner { heading, iso_date, .. } => {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("✅").size(28.0));
                    ui.label(egui::RichText::new(heading).strong().color(colors::ATTEND_TEXT));
                    ui.label(egui::RichText::new(iso_date).size(18.0).strong());
                    ui.add_space(8.0);
                    let cancel = filled_button(
                        "Cancel Attendance",
                        colors::CONFIRMED_CANCEL_BUTTON,
                        egui::Color32::WHITE,
                    );
                    if ui.add(cancel).clicked() {
                        actions.push(AttendanceAction::CancelAttendance);
                    }
                });
            }
        }
    });
}

/// Date, weekday, title, optional speaker and time
pub fn render_event_details(ui: &mut egui::Ui, details: &EventDetails) {
    ui.label(
        egui::RichText::new(format!("{} ({})", details.iso_date, details.weekday))
            .size(14.0)
            .color(colors::WEEKDAY_TEXT),
    );
    ui.label(egui::RichText::new(&details.title).size(20.0).strong().color(colors::HEADER_TEXT));
    if let Some(speaker) = &details.speaker {
        ui.label(format!("🎤 {}", speaker));
    }
    ui.label(egui::RichText::new(&details.time_label).color(colors::WEEKDAY_TEXT));
}
