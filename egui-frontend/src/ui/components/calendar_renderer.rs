//! # Calendar Renderer Module
//!
//! Draws the month grid from an [`AttendanceView`]: a header with month
//! navigation, the Sunday-first weekday row, then seven-column rows of cells.
//!
//! The renderer never touches the selector. Clicks come back as
//! [`AttendanceAction`]s for the app to apply after the frame.

use eframe::egui;
use egui::Color32;
use shared::{AttendanceView, CalendarCell, CellStyle, CellView};

use crate::ui::components::styling::{card_frame, colors};
use crate::ui::state::AttendanceAction;

const DAYS_PER_WEEK: usize = 7;
const CELL_HEIGHT: f32 = 44.0;
const CELL_SPACING: f32 = 4.0;

/// Fill and text colour for a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellColors {
    pub fill: Option<Color32>,
    pub text: Color32,
    pub glow: Option<Color32>,
}

impl CellColors {
    pub fn for_style(style: CellStyle, locked: bool) -> Self {
        let colors = match style {
            CellStyle::Confirmed => Self {
                fill: Some(colors::CONFIRMED),
                text: Color32::WHITE,
                glow: None,
            },
            CellStyle::Selected => Self {
                fill: Some(colors::SELECTED),
                text: Color32::WHITE,
                glow: Some(colors::SELECTED_GLOW),
            },
            CellStyle::Scheduled => Self {
                fill: Some(colors::SCHEDULED),
                text: Color32::WHITE,
                glow: None,
            },
            CellStyle::Plain => Self {
                fill: None,
                text: colors::PLAIN_DAY_TEXT,
                glow: None,
            },
            CellStyle::Blank => Self {
                fill: None,
                text: Color32::TRANSPARENT,
                glow: None,
            },
        };

        if locked {
            colors.dimmed(colors::LOCKED_OPACITY)
        } else {
            colors
        }
    }

    fn dimmed(self, factor: f32) -> Self {
        Self {
            fill: self.fill.map(|c| c.gamma_multiply(factor)),
            text: self.text.gamma_multiply(factor),
            glow: self.glow.map(|c| c.gamma_multiply(factor)),
        }
    }
}

/// Render the month header, weekday labels and day grid
pub fn render_calendar(
    ui: &mut egui::Ui,
    view: &AttendanceView,
    actions: &mut Vec<AttendanceAction>,
) {
    card_frame(colors::CALENDAR_BACKGROUND).show(ui, |ui| {
        render_month_header(ui, view, actions);
        ui.add_space(6.0);

        let cell_width = cell_width(ui.available_width());
        render_weekday_row(ui, view, cell_width);

        for week in view.cells.chunks(DAYS_PER_WEEK) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(CELL_SPACING, CELL_SPACING);
                for cell in week {
                    if let Some(action) = render_cell(ui, cell, view.locked, cell_width) {
                        actions.push(action);
                    }
                }
            });
        }
    });
}

fn cell_width(available: f32) -> f32 {
    ((available - CELL_SPACING * (DAYS_PER_WEEK as f32 - 1.0)) / DAYS_PER_WEEK as f32).max(24.0)
}

fn render_month_header(
    ui: &mut egui::Ui,
    view: &AttendanceView,
    actions: &mut Vec<AttendanceAction>,
) {
    let enabled = !view.locked;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(enabled, egui::Button::new("◀"))
            .on_hover_text("Previous month")
            .clicked()
        {
            actions.push(AttendanceAction::PreviousMonth);
        }

        ui.label(
            egui::RichText::new(&view.month.title)
                .size(20.0)
                .strong()
                .color(colors::HEADER_TEXT),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(enabled, egui::Button::new("▶"))
                .on_hover_text("Next month")
                .clicked()
            {
                actions.push(AttendanceAction::NextMonth);
            }
            if ui.add_enabled(enabled, egui::Button::new("Today")).clicked() {
                actions.push(AttendanceAction::CurrentMonth);
            }
        });
    });
}

fn render_weekday_row(ui: &mut egui::Ui, view: &AttendanceView, cell_width: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(CELL_SPACING, CELL_SPACING);
        for label in &view.weekday_labels {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(cell_width, 24.0), egui::Sense::hover());
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(14.0),
                colors::WEEKDAY_TEXT,
            );
        }
    });
}

/// Draw one cell; returns a tap when an interactive day was clicked
fn render_cell(
    ui: &mut egui::Ui,
    cell: &CellView,
    locked: bool,
    width: f32,
) -> Option<AttendanceAction> {
    let sense = if cell.interactive && !cell.cell.is_empty() {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, CELL_HEIGHT), sense);

    let CalendarCell::Day(day) = &cell.cell else {
        return None;
    };

    let palette = CellColors::for_style(cell.style, locked);
    let painter = ui.painter();
    let radius = (rect.height().min(rect.width()) / 2.0) - 3.0;

    if let Some(glow) = palette.glow {
        painter.circle_filled(rect.center(), radius + 3.0, glow);
    }
    if let Some(fill) = palette.fill {
        painter.circle_filled(rect.center(), radius, fill);
    }
    if day.is_today {
        painter.circle_stroke(
            rect.center(),
            radius + 1.0,
            egui::Stroke::new(2.0, colors::TODAY_RING),
        );
    }
    if response.hovered() && cell.interactive {
        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(1.0, colors::SELECTED));
    }

    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        day.day.to_string(),
        egui::FontId::proportional(16.0),
        palette.text,
    );

    let response = response.on_hover_text(cell.label.as_str());
    if response.clicked() {
        Some(AttendanceAction::Tap(day.date))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_cells_are_filled() {
        let palette = CellColors::for_style(CellStyle::Scheduled, false);
        assert_eq!(palette.fill, Some(colors::SCHEDULED));
        assert_eq!(palette.glow, None);
    }

    #[test]
    fn test_only_selected_cell_glows() {
        assert!(CellColors::for_style(CellStyle::Selected, false).glow.is_some());
        assert!(CellColors::for_style(CellStyle::Confirmed, false).glow.is_none());
        assert!(CellColors::for_style(CellStyle::Plain, false).fill.is_none());
    }

    #[test]
    fn test_locked_calendar_is_dimmed() {
        let normal = CellColors::for_style(CellStyle::Scheduled, false);
        let locked = CellColors::for_style(CellStyle::Scheduled, true);
        assert_ne!(normal.fill, locked.fill);
        assert_eq!(locked.fill, Some(colors::SCHEDULED.gamma_multiply(colors::LOCKED_OPACITY)));
    }

    #[test]
    fn test_cell_width_fills_seven_columns() {
        let width = cell_width(7.0 * 50.0 + 6.0 * CELL_SPACING);
        assert!((width - 50.0).abs() < f32::EPSILON);
        assert_eq!(cell_width(10.0), 24.0);
    }
}
