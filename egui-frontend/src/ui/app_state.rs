//! # App State Module
//!
//! Top-level state for the desktop host: the backend, the screen stack,
//! the attendance widget while its screen is open, and the toasts.
//!
//! Rendering only collects [`AttendanceAction`]s; [`MassAttendanceApp::apply_action`]
//! feeds them to the selector afterwards and moves any notices into toasts.

use std::time::Instant;

use log::{info, warn};
use mass_attendance_backend::{AttendanceSelector, Backend};

use crate::config::AppConfig;
use crate::ui::state::{AttendanceAction, NavigationState, NoticeState, Screen};

pub struct MassAttendanceApp {
    pub backend: Backend,
    pub config: AppConfig,
    pub navigation: NavigationState,
    /// Present only while the attendance screen is on the stack
    pub attendance: Option<AttendanceSelector>,
    pub notices: NoticeState,
    pub style_applied: bool,
}

impl MassAttendanceApp {
    /// A schedule file that fails to load is logged and replaced by the
    /// built-in table, so a bad file never keeps the app from starting.
    pub fn new(config: AppConfig) -> Self {
        info!("🚀 Initializing MassAttendanceApp");
        let backend = match Backend::initialize(config.schedule_file.as_deref()) {
            Ok(backend) => backend,
            Err(e) => {
                warn!("Falling back to built-in schedule: {:#}", e);
                Backend::new()
            }
        };
        Self::with_backend(backend, config)
    }

    pub fn with_backend(backend: Backend, config: AppConfig) -> Self {
        let notices = NoticeState::new(config.notice_duration());
        Self {
            backend,
            config,
            navigation: NavigationState::new(),
            attendance: None,
            notices,
            style_applied: false,
        }
    }

    /// Push the attendance screen with a fresh widget instance
    pub fn open_mass_attendance(&mut self) {
        if self.navigation.current() == Some(Screen::MassAttendance) {
            return;
        }
        self.attendance = Some(self.backend.attendance_selector());
        self.navigation.push(Screen::MassAttendance);
    }

    pub fn apply_action(&mut self, action: AttendanceAction, now: Instant) {
        let Some(selector) = self.attendance.as_mut() else {
            warn!("Ignoring {:?}: attendance screen is not open", action);
            return;
        };

        match action {
            AttendanceAction::Tap(date) => {
                selector.tap(date);
            }
            AttendanceAction::Attend => {
                selector.attend();
            }
            AttendanceAction::CancelSelection => {
                selector.cancel_selection();
            }
            AttendanceAction::ConfirmOk => {
                selector.confirm_ok();
            }
            AttendanceAction::ConfirmCancel => {
                selector.confirm_cancel();
            }
            AttendanceAction::CancelAttendance => {
                selector.cancel_attendance();
            }
            AttendanceAction::PreviousMonth => {
                selector.show_previous_month();
            }
            AttendanceAction::NextMonth => {
                selector.show_next_month();
            }
            AttendanceAction::CurrentMonth => {
                selector.show_current_month();
            }
            AttendanceAction::Back => {
                if selector.go_back(&mut self.navigation) {
                    self.attendance = None;
                    return;
                }
            }
        }

        for notice in selector.drain_notices() {
            self.notices.push(&notice, now);
        }
    }

    /// The last screen has been popped
    pub fn should_close(&self) -> bool {
        self.navigation.is_empty()
    }
}
