//! `gt-config` — turns a location/route description into a `TravelMap`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ini`]     | `Section`, `parse_sections`: raw section/key reader     |
//! | [`loader`]  | `load_map_file`, `load_map_reader`, `load_map_str`      |
//! | [`error`]   | `ConfigError`, `ConfigResult<T>`                        |
//!
//! # Format
//!
//! ```text
//! # single-line comments allowed
//! [Location home]
//! latitude = 52.2297
//! longitude = 21.0122
//! visit_time = 8h, 10h          # optional, default 0,0
//!
//! [Route to work]
//! start_at = home
//! end_at = office
//! waypoints = bakery, bus stop  # optional
//! probability = 0.9             # optional, default 1.0
//! weekdays = 0, 1, 2, 3, 4      # optional, Monday = 0; default all days
//! ```
//!
//! Durations take an `h`, `m` or `s` suffix (seconds if omitted).  Section
//! prefixes `Location ` and `Route ` are case-sensitive; key names are not.

pub mod error;
pub mod ini;
pub mod loader;


pub use error::{ConfigError, ConfigResult};
pub use loader::{load_map_file, load_map_reader, load_map_str};
