//! # Notice State Module
//!
//! Toasts for [`AttendanceNotice`]s. They never block input, disappear after
//! the configured duration, and can be dismissed early with a click.

use std::time::{Duration, Instant};

use shared::AttendanceNotice;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct NoticeState {
    toasts: Vec<Toast>,
    next_id: u64,
    duration: Duration,
}

impl NoticeState {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            duration,
        }
    }

    pub fn push(&mut self, notice: &AttendanceNotice, now: Instant) {
        log::debug!("Showing notice: {}", notice);
        self.toasts.push(Toast {
            id: self.next_id,
            message: notice.message(),
            expires_at: now + self.duration,
        });
        self.next_id += 1;
    }

    /// Drop toasts whose time is up
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// How long until the next toast expires, for scheduling a repaint
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .map(|toast| toast.expires_at.saturating_duration_since(now))
            .min()
    }
}
