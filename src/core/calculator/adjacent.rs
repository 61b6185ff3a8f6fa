use crate::models::clock_event::ClockEvent;
use crate::utils::time::hours_between;

/// Sum of the gaps that end on a clock-in.
///
/// Events are sorted by timestamp first (ties keep insertion order). For
/// every event after the first one that is a clock-in, the time elapsed
/// since the previous event is added, no matter what kind that event was.
/// The first event never contributes, and two clock-ins in a row count the
/// gap between them. Returns 0.0 for an empty slice.
pub fn adjacent_gap_hours(events: &[ClockEvent]) -> f64 {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| (e.timestamp, e.id));

    sorted
        .windows(2)
        .filter(|w| w[1].kind.is_in())
        .map(|w| hours_between(&w[0].timestamp, &w[1].timestamp))
        .sum()
}
