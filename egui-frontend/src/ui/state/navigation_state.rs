//! # Navigation State Module
//!
//! A minimal screen stack standing in for the wider church app. The
//! attendance widget only ever asks it to go back one level; popping the
//! last screen means the app should close.

use mass_attendance_backend::HostRouter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    MassAttendance,
}

#[derive(Debug)]
pub struct NavigationState {
    stack: Vec<Screen>,
}

impl NavigationState {
    /// Start on the dashboard
    pub fn new() -> Self {
        Self { stack: vec![Screen::Dashboard] }
    }

    pub fn current(&self) -> Option<Screen> {
        self.stack.last().copied()
    }

    pub fn push(&mut self, screen: Screen) {
        log::info!("🧭 Navigating to {:?}", screen);
        self.stack.push(screen);
    }

    /// Nothing left to show
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRouter for NavigationState {
    fn go_back(&mut self) {
        let left = self.stack.pop();
        log::info!("🧭 Back from {:?} to {:?}", left, self.current());
    }
}
