//! Named locations and their dwell-time ranges.
//!
//! A `Location` is built once while the map is loaded and never mutated
//! afterwards.  The only behavior it carries is drawing a random dwell time.

use crate::{CoreError, CoreResult, GeoPoint, TraceRng};

// ── DwellRange ────────────────────────────────────────────────────────────────

/// Inclusive range of seconds a traveler spends at a location.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DwellRange {
    pub min_secs: u32,
    pub max_secs: u32,
}

impl DwellRange {
    /// Pass straight through: no time is spent at the location.
    pub const ZERO: DwellRange = DwellRange { min_secs: 0, max_secs: 0 };

    /// Construct a range, rejecting `min > max`.
    pub fn new(min_secs: u32, max_secs: u32) -> CoreResult<Self> {
        if min_secs > max_secs {
            return Err(CoreError::InvalidFieldFormat(format!(
                "dwell range minimum {min_secs}s exceeds maximum {max_secs}s"
            )));
        }
        Ok(Self { min_secs, max_secs })
    }

    /// A range that always yields `secs`.
    pub fn fixed(secs: u32) -> Self {
        Self { min_secs: secs, max_secs: secs }
    }

    #[inline]
    pub fn is_fixed(self) -> bool {
        self.min_secs == self.max_secs
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A named point the traveler can visit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub name: String,
    pub point: GeoPoint,
    pub dwell: DwellRange,
}

impl Location {
    /// Construct a location, rejecting non-finite coordinates.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        dwell: DwellRange,
    ) -> CoreResult<Self> {
        Ok(Self {
            name:  name.into(),
            point: GeoPoint::checked(latitude, longitude)?,
            dwell,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.point.lat
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.point.lon
    }

    /// Draw a dwell duration in seconds, uniformly from the inclusive range.
    ///
    /// Deterministic (no RNG draw) when `min == max`.
    pub fn random_dwell(&self, rng: &mut TraceRng) -> u32 {
        if self.dwell.is_fixed() {
            return self.dwell.min_secs;
        }
        rng.gen_range(self.dwell.min_secs..=self.dwell.max_secs)
    }
}
