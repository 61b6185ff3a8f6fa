use serde::Serialize;

/// Kind of a clock event.
///
/// Stored labels are not consistent across the history of the database:
/// `Stempeln` and `Einstempeln` both mean clock-in, `Ausstempeln` means
/// clock-out. The neutral `in` / `out` labels are accepted as well.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ClockIn,
    ClockOut,
}

impl EventKind {
    /// Convert enum → DB string (labels written by the recorder)
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "Einstempeln",
            EventKind::ClockOut => "Ausstempeln",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Stempeln" | "Einstempeln" | "in" => Some(EventKind::ClockIn),
            "Ausstempeln" | "out" => Some(EventKind::ClockOut),
            _ => None,
        }
    }

    /// Short label for terminal output
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "in",
            EventKind::ClockOut => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::ClockIn)
    }
}
