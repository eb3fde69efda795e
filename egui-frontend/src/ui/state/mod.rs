//! # State Module
//!
//! UI-side state that is not owned by the attendance selector itself.
//!
//! - `navigation_state` - screen stack and the host router the widget calls
//! - `notice_state` - toasts for notices handed over by the selector
//! - `actions` - user intents collected while rendering a frame

pub mod actions;
pub mod navigation_state;
pub mod notice_state;

pub use actions::*;
pub use navigation_state::*;
pub use notice_state::*;
