//! Per-engine tuning knobs.

use gt_core::PING_INTERVAL_SECS;

use crate::{EngineError, EngineResult};

/// Trace engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceConfig {
    /// Seconds between pings while dwelling at a route's start or end.
    /// Must be > 0.  Default: 600.
    pub ping_interval_secs: u32,

    /// Fail with [`EngineError::NoProgress`] instead of looping forever when
    /// a zero-dwell route cycle is detected.  Default: `true`.
    pub detect_stalls: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            ping_interval_secs: PING_INTERVAL_SECS,
            detect_stalls:      true,
        }
    }
}

impl TraceConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.ping_interval_secs == 0 {
            return Err(EngineError::Config("ping_interval_secs must be > 0".to_owned()));
        }
        Ok(())
    }
}
