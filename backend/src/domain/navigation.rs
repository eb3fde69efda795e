//! Outbound navigation seam between the widget and its host.

/// Router owned by the host application
pub trait HostRouter {
    /// Pop one navigation level
    fn go_back(&mut self);
}
