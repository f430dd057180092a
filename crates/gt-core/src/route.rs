//! Routes between locations and the weekdays they run on.

use std::fmt;

use crate::{CoreError, CoreResult, LocationId};

// ── Weekdays ──────────────────────────────────────────────────────────────────

/// A set of weekdays stored as a 7-bit mask.  Monday = 0, Sunday = 6.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weekdays(u8);

impl Weekdays {
    pub const NONE: Weekdays = Weekdays(0);
    pub const ALL: Weekdays = Weekdays(0b111_1111);

    /// Build a set from day indices, rejecting anything outside `0..=6`.
    pub fn from_days<I: IntoIterator<Item = u8>>(days: I) -> CoreResult<Self> {
        let mut mask = 0u8;
        for day in days {
            if day > 6 {
                return Err(CoreError::InvalidFieldFormat(format!(
                    "weekday {day} is outside 0 (Monday) ..= 6 (Sunday)"
                )));
            }
            mask |= 1 << day;
        }
        Ok(Weekdays(mask))
    }

    #[inline]
    pub fn contains(self, day: u8) -> bool {
        day < 7 && self.0 & (1 << day) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member days in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..7u8).filter(move |&d| self.contains(d))
    }
}

impl Default for Weekdays {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Debug for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered path from `start` through `waypoints` to `end`.
///
/// Locations are referenced by id.  That every id resolves is checked when the
/// route is added to a [`TravelMapBuilder`][crate::TravelMapBuilder]; the
/// constructor only validates what it can see on its own.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub name: String,
    pub start: LocationId,
    pub end: LocationId,
    pub waypoints: Vec<LocationId>,
    /// Selection weight in `[0, 1]`.  Higher wins; `0.0` is never selected.
    pub probability: f64,
    pub active_weekdays: Weekdays,
}

impl Route {
    /// A route active every day with probability 1.0 and no waypoints.
    pub fn direct(name: impl Into<String>, start: LocationId, end: LocationId) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            waypoints: Vec::new(),
            probability: 1.0,
            active_weekdays: Weekdays::ALL,
        }
    }

    /// Construct a route, rejecting a probability outside `[0, 1]` (or NaN).
    pub fn new(
        name: impl Into<String>,
        start: LocationId,
        end: LocationId,
        waypoints: Vec<LocationId>,
        probability: f64,
        active_weekdays: Weekdays,
    ) -> CoreResult<Self> {
        let name = name.into();
        if !(0.0..=1.0).contains(&probability) {
            return Err(CoreError::InvalidFieldFormat(format!(
                "probability {probability} of route {name:?} is outside [0.0, 1.0]"
            )));
        }
        Ok(Self { name, start, end, waypoints, probability, active_weekdays })
    }

    /// `true` if the route departs from `location` on `weekday`.
    #[inline]
    pub fn is_eligible(&self, location: LocationId, weekday: u8) -> bool {
        self.start == location && self.active_weekdays.contains(weekday)
    }

    /// Every location id the route touches, in travel order.
    pub fn stops(&self) -> impl Iterator<Item = LocationId> + '_ {
        std::iter::once(self.start)
            .chain(self.waypoints.iter().copied())
            .chain(std::iter::once(self.end))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Route {}({},{},{},{:?})>",
            self.name, self.start.0, self.end.0, self.probability, self.active_weekdays
        )
    }
}
