//! Plain data row written by output backends.

use gt_core::time::format_timestamp;
use gt_core::TravelMap;
use gt_engine::Trace;

/// One ping, flattened for output.
#[derive(Debug, Clone, PartialEq)]
pub struct PingRow {
    pub user_id:   String,
    pub latitude:  f64,
    pub longitude: f64,
    /// `YYYY-MM-DD HH:MM:SS`, whole seconds.
    pub timestamp: String,
}

impl PingRow {
    /// Flatten every ping of `trace`, resolving coordinates through `map`.
    ///
    /// Pings whose location is not in `map` are skipped; a trace produced
    /// from the same map never has any.
    pub fn from_trace(user_id: &str, trace: &Trace, map: &TravelMap) -> Vec<PingRow> {
        trace
            .iter()
            .filter_map(|ping| {
                map.location(ping.location).map(|loc| PingRow {
                    user_id:   user_id.to_owned(),
                    latitude:  loc.latitude(),
                    longitude: loc.longitude(),
                    timestamp: format_timestamp(ping.at),
                })
            })
            .collect()
    }
}
