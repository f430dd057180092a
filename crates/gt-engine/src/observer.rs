//! Observer hooks for a trace run.

use chrono::NaiveDateTime;
use gt_core::Route;

use crate::{PingEvent, TraceOutcome};

/// Callbacks invoked by [`TraceEngine::trace_with`][crate::TraceEngine::trace_with].
///
/// All methods default to no-ops.
pub trait TraceObserver {
    /// A route was selected at `at`, before any of its pings are emitted.
    fn on_route_chosen(&mut self, _at: NaiveDateTime, _route: &Route) {}

    /// Called for every ping, in output order.
    fn on_ping(&mut self, _ping: &PingEvent) {}

    /// Called once when the loop stops without error.
    fn on_trace_end(&mut self, _outcome: &TraceOutcome, _pings: usize) {}
}

/// A [`TraceObserver`] that does nothing.
pub struct NoopObserver;

impl TraceObserver for NoopObserver {}
