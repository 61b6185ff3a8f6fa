use super::{event_kind::EventKind, user::User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    ClockedIn,
    ClockedOut,
}

impl ClockStatus {
    /// Status implied by the most recent event; no event means clocked out.
    pub fn from_last_event(kind: Option<EventKind>) -> Self {
        match kind {
            Some(EventKind::ClockIn) => ClockStatus::ClockedIn,
            Some(EventKind::ClockOut) | None => ClockStatus::ClockedOut,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClockStatus::ClockedIn => "clocked in",
            ClockStatus::ClockedOut => "clocked out",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserStatus {
    pub user: User,
    pub status: ClockStatus,
}
