//! # Components Module
//!
//! Rendering pieces for the desktop host.
//!
//! - `calendar_renderer` - month header, weekday row and day grid
//! - `attendance_panel` - prompt, event card and confirmed banner
//! - `confirmation_modal` - blocking OK / Cancel dialog
//! - `notices` - transient toasts
//! - `dashboard` - landing screen that opens the schedule
//! - `styling` - global style and colour palette

pub mod attendance_panel;
pub mod calendar_renderer;
pub mod confirmation_modal;
pub mod dashboard;
pub mod notices;
pub mod styling;

pub use attendance_panel::*;
pub use calendar_renderer::*;
pub use confirmation_modal::*;
pub use dashboard::*;
pub use notices::*;
pub use styling::*;
