//! `gt-core` — foundational types for the `gpstrace` trace generator.
//!
//! Every other `gt-*` crate depends on this one.  It has no `gt-*`
//! dependencies and few external ones (`rand`, `chrono`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`ids`]        | `LocationId`                                            |
//! | [`geo`]        | `GeoPoint`, haversine distance                          |
//! | [`location`]   | `Location`, `DwellRange`                                |
//! | [`route`]      | `Route`, `Weekdays`                                     |
//! | [`map`]        | `TravelMap`, `TravelMapBuilder`                         |
//! | [`rng`]        | `TraceRng`                                              |
//! | [`time`]       | timestamp parsing/formatting, weekday index             |
//! | [`parse`]      | pure field parsers (durations, weekday lists, …)        |
//! | [`error`]      | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod location;
pub mod map;
pub mod parse;
pub mod rng;
pub mod route;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::LocationId;
pub use location::{DwellRange, Location};
pub use map::{TravelMap, TravelMapBuilder};
pub use rng::TraceRng;
pub use route::{Route, Weekdays};
pub use time::{PING_INTERVAL_SECS, TIMESTAMP_FORMAT};
