use chrono::NaiveDate;

/// Something the user asked the attendance screen to do this frame.
///
/// Renderers only collect these; they are applied after the frame is drawn
/// so the view snapshot never changes mid-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceAction {
    Tap(NaiveDate),
    Attend,
    CancelSelection,
    ConfirmOk,
    ConfirmCancel,
    CancelAttendance,
    PreviousMonth,
    NextMonth,
    CurrentMonth,
    Back,
}
