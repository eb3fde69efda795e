use std::time::Instant;

use eframe::egui;
use crate::ui::app_state::MassAttendanceApp;
use crate::ui::state::{AttendanceAction, Screen};
use crate::ui::*;

impl eframe::App for MassAttendanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            setup_parish_style(ctx);
            self.style_applied = true;
        }

        let now = Instant::now();
        self.notices.expire(now);

        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| match self.navigation.current() {
            Some(Screen::Dashboard) => {
                if render_dashboard(ui, &self.config.window_title) {
                    self.open_mass_attendance();
                }
            }
            Some(Screen::MassAttendance) => self.render_attendance_screen(ui, &mut actions),
            None => {}
        });

        self.render_modals(ctx, &mut actions);
        render_notices(ctx, &mut self.notices);

        for action in actions {
            self.apply_action(action, now);
        }

        if self.should_close() {
            log::info!("👋 Navigation stack empty, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Wake up again when the next toast should disappear
        if let Some(remaining) = self.notices.next_expiry(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl MassAttendanceApp {
    /// Header with Back, then the calendar and the panel below it
    fn render_attendance_screen(&self, ui: &mut egui::Ui, actions: &mut Vec<AttendanceAction>) {
        let Some(selector) = &self.attendance else {
            return;
        };
        let view = selector.view(self.backend.today());

        ui.horizontal(|ui| {
            if ui.add_enabled(view.can_go_back, egui::Button::new("⬅ Back")).clicked() {
                actions.push(AttendanceAction::Back);
            }
            ui.label(
                egui::RichText::new("Mass and Event Schedule")
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::HEADER_TEXT),
            );
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            render_calendar(ui, &view, actions);
            ui.add_space(12.0);
            render_attendance_panel(ui, &view, actions);
        });
    }

    fn render_modals(&self, ctx: &egui::Context, actions: &mut Vec<AttendanceAction>) {
        if let Some(selector) = &self.attendance {
            if selector.is_confirming() {
                render_confirmation_modal(ctx, &selector.view(self.backend.today()), actions);
            }
        }
    }
}
