//! # Domain Module
//!
//! Business logic for the mass attendance scheduler.
//!
//! ## Module Organization
//!
//! - **schedule_source**: the immutable date → event table and the providers that build it
//! - **calendar**: month grid construction and month navigation
//! - **attendance**: the attendance selection/confirmation state machine
//! - **clock**: where "today" comes from
//! - **navigation**: the host router the widget calls to go back
//!
//! ## Business Rules
//!
//! - A date is selectable only if the schedule has an event on it
//! - Tapping an unscheduled date produces a notice, never a state change
//! - While a confirmation is pending the widget accepts only OK or Cancel
//! - A confirmed attendance stays until it is explicitly cancelled

pub mod schedule_source;
pub mod calendar;
pub mod attendance;
pub mod clock;
pub mod navigation;

pub use schedule_source::*;
pub use calendar::*;
pub use attendance::*;
pub use clock::*;
pub use navigation::*;
