use eframe::egui;

use crate::ui::components::styling::{card_frame, colors, filled_button};

/// Landing screen standing in for the rest of the parish app.
/// Returns true when the user opens the schedule.
pub fn render_dashboard(ui: &mut egui::Ui, title: &str) -> bool {
    let mut open = false;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(egui::RichText::new(title).color(colors::HEADER_TEXT));
        ui.add_space(24.0);

        card_frame(colors::PANEL_BACKGROUND).show(ui, |ui| {
            ui.label("See upcoming Masses and events, and let the parish know you'll attend.");
            ui.add_space(12.0);
            let button =
                filled_button("⛪ Mass Attendance", colors::ATTEND_BUTTON, colors::ATTEND_TEXT);
            open = ui.add(button).clicked();
        });
    });

    open
}
