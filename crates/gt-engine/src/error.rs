use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("trace configuration error: {0}")]
    Config(String),

    #[error("unknown start location {0:?}")]
    UnknownStartLocation(String),

    /// No eligible route leaves the location.  [`TraceEngine`] turns this into
    /// an early, successful end of the trace; it only escapes from direct
    /// [`choose_route`] calls.
    ///
    /// [`TraceEngine`]: crate::TraceEngine
    /// [`choose_route`]: crate::choose_route
    #[error("no route available starting at location {location:?}")]
    NoRouteAvailable { location: String },

    /// The route graph cycled back to `location` without simulated time
    /// moving forward; the trace could never reach its end time.
    #[error("no time progress: returned to location {location:?} at {at} with zero dwell")]
    NoProgress { location: String, at: NaiveDateTime },

    #[error("simulated time overflowed past {0}")]
    TimeOverflow(NaiveDateTime),
}

pub type EngineResult<T> = Result<T, EngineError>;
