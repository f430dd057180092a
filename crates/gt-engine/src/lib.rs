//! `gt-engine` — route selection and trace generation.
//!
//! # Trace loop
//!
//! ```text
//! now = start_time, here = start_location
//! while now < end_time:
//!   ① Select   — highest-probability route leaving `here` on now's weekday
//!                (first defined wins ties).  None → stop, partial trace.
//!   ② Start    — dwell at the route's start, one ping every interval.
//!   ③ Waypoints — one ping on arrival at each, then advance by its dwell.
//!   ④ End      — dwell at the route's end, pinged like the start.
//!   ⑤ here = route.end
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`selector`] | `choose_route`, `eligible_routes`                      |
//! | [`engine`]   | `TraceEngine`, ping expansion                          |
//! | [`trace`]    | `PingEvent`, `Trace`, `TraceOutcome`                   |
//! | [`config`]   | `TraceConfig`                                          |
//! | [`observer`] | `TraceObserver`, `NoopObserver`                        |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let map = gt_config::load_map_file(Path::new("gpstrace.cfg"))?;
//! let engine = TraceEngine::new(&map, TraceConfig::default())?;
//! let trace = engine.trace_from("home", start, None, &mut TraceRng::new(42))?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod selector;
pub mod trace;


pub use config::TraceConfig;
pub use engine::TraceEngine;
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, TraceObserver};
pub use selector::choose_route;
pub use trace::{PingEvent, Trace, TraceOutcome};
