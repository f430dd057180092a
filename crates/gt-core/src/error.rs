//! Load-time error type shared by the `gt-*` crates.
//!
//! Everything here is fatal: a map that fails validation is never handed to
//! the trace engine.  Trace-time conditions live in `gt-engine`.

use thiserror::Error;

/// Errors raised while building locations, routes and the travel map.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A route field names a location that is not in the directory.
    #[error("undefined location {location:?} in route {route:?}")]
    InvalidLocationReference { route: String, location: String },

    /// A waypoint id does not resolve to a location in the directory.
    #[error("waypoint at index {index} of route {route:?} is not a known location")]
    InvalidWaypoint { route: String, index: usize },

    /// A malformed dwell time, weekday list, probability or coordinate.
    #[error("invalid field format: {0}")]
    InvalidFieldFormat(String),

    #[error("location {0:?} is defined more than once")]
    DuplicateLocation(String),
}

/// Shorthand result type for `gt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
