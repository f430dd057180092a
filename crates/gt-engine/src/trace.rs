//! Trace output types.

use chrono::NaiveDateTime;
use gt_core::LocationId;

/// One simulated GPS fix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PingEvent {
    pub location: LocationId,
    pub at:       NaiveDateTime,
}

/// Why the trace loop stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceOutcome {
    /// Simulated time reached the requested end time.
    Completed,
    /// No eligible route left `location` at `at`; the trace is partial.
    RouteExhausted { location: String, at: NaiveDateTime },
}

/// The ordered pings produced by one trace run.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub pings:   Vec<PingEvent>,
    pub outcome: TraceOutcome,
    /// Simulated time when the loop stopped.  May overshoot the requested end
    /// time because a route is always traversed to its end.
    pub finished_at: NaiveDateTime,
}

impl Trace {
    #[inline]
    pub fn len(&self) -> usize {
        self.pings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PingEvent> {
        self.pings.iter()
    }

    /// `true` if the loop ran out of routes before the end time.
    pub fn is_partial(&self) -> bool {
        matches!(self.outcome, TraceOutcome::RouteExhausted { .. })
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a PingEvent;
    type IntoIter = std::slice::Iter<'a, PingEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.pings.iter()
    }
}
