//! # Styling Module
//!
//! Global egui style and the colour palette for the attendance screen.
//!
//! ## Color Palette:
//! - Greens for scheduled, selected and confirmed dates
//! - Pale green backgrounds for the calendar and the details panel
//! - Grey and red for cancel actions

use eframe::egui;
use egui::Color32;

/// Calm, readable styling for the whole app
pub fn setup_parish_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::PAGE_BACKGROUND;
        style.visuals.button_frame = true;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Pale card with rounded corners, used for the calendar and the panel below it
pub fn card_frame(fill: Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(12.0))
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
}

/// Filled button with the given background and text colours
pub fn filled_button(text: &str, fill: Color32, text_color: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(text_color).strong())
        .fill(fill)
        .rounding(egui::Rounding::same(8.0))
}

pub mod colors {
    use eframe::egui::Color32;

    pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(250, 252, 248);
    pub const HEADER_TEXT: Color32 = Color32::from_rgb(46, 125, 50);

    // Calendar
    pub const CALENDAR_BACKGROUND: Color32 = Color32::from_rgb(222, 241, 215);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(200, 225, 195);
    pub const WEEKDAY_TEXT: Color32 = Color32::from_rgb(85, 85, 85);
    pub const PLAIN_DAY_TEXT: Color32 = Color32::from_rgb(51, 51, 51);
    pub const SCHEDULED: Color32 = Color32::from_rgb(46, 125, 50);
    pub const SELECTED: Color32 = Color32::from_rgb(27, 94, 32);
    pub const SELECTED_GLOW: Color32 = Color32::from_rgba_premultiplied(27, 94, 32, 90);
    pub const CONFIRMED: Color32 = Color32::from_rgb(129, 199, 132);
    pub const TODAY_RING: Color32 = Color32::from_rgb(255, 179, 0);

    // Details panel
    pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(231, 245, 219);
    pub const ATTEND_BUTTON: Color32 = Color32::from_rgb(200, 230, 201);
    pub const ATTEND_TEXT: Color32 = Color32::from_rgb(37, 96, 41);
    pub const CANCEL_BUTTON: Color32 = Color32::from_rgb(119, 119, 119);
    pub const CONFIRMED_CANCEL_BUTTON: Color32 = Color32::from_rgb(153, 153, 153);

    // Confirmation dialog
    pub const DIALOG_OK: Color32 = Color32::from_rgb(76, 175, 80);
    pub const DIALOG_CANCEL: Color32 = Color32::from_rgb(244, 67, 54);
    pub const BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 110);

    // Toasts
    pub const TOAST_BACKGROUND: Color32 = Color32::from_rgb(50, 50, 50);
    pub const TOAST_TEXT: Color32 = Color32::WHITE;

    /// Opacity applied to the calendar while the confirmation dialog is open
    pub const LOCKED_OPACITY: f32 = 0.6;
}
