//! # Storage Module
//!
//! Read-only loading of schedule tables. Attendance itself is never written
//! anywhere; it lives in the selector until the screen is left.

pub mod schedule_file;

pub use schedule_file::*;
