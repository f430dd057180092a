//! The trace engine: walks routes forward in simulated time and emits pings.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::{debug, info};

use gt_core::time::weekday_index;
use gt_core::{LocationId, Route, TraceRng, TravelMap};

use crate::selector::choose_route;
use crate::{
    EngineError, EngineResult, NoopObserver, PingEvent, Trace, TraceConfig, TraceObserver,
    TraceOutcome,
};

/// Mutable state of one run.  Lives on the stack of a single `trace` call, so
/// a `TraceEngine` can serve any number of independent runs.
struct Cursor<'o, O: TraceObserver> {
    now:      NaiveDateTime,
    pings:    Vec<PingEvent>,
    observer: &'o mut O,
}

impl<O: TraceObserver> Cursor<'_, O> {
    fn emit(&mut self, location: LocationId, at: NaiveDateTime) {
        let ping = PingEvent { location, at };
        self.observer.on_ping(&ping);
        self.pings.push(ping);
    }

    fn advance(&mut self, secs: u32) -> EngineResult<()> {
        self.now = self
            .now
            .checked_add_signed(TimeDelta::seconds(i64::from(secs)))
            .ok_or(EngineError::TimeOverflow(self.now))?;
        Ok(())
    }
}

/// Generates traces over a borrowed, read-only [`TravelMap`].
pub struct TraceEngine<'m> {
    map:    &'m TravelMap,
    config: TraceConfig,
}

impl<'m> TraceEngine<'m> {
    /// Create an engine, validating `config`.
    pub fn new(map: &'m TravelMap, config: TraceConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { map, config })
    }

    pub fn map(&self) -> &'m TravelMap {
        self.map
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Resolve `start` by name, then [`trace`][Self::trace].
    pub fn trace_from(
        &self,
        start:      &str,
        start_time: NaiveDateTime,
        end_time:   Option<NaiveDateTime>,
        rng:        &mut TraceRng,
    ) -> EngineResult<Trace> {
        let id = self
            .map
            .lookup(start)
            .ok_or_else(|| EngineError::UnknownStartLocation(start.to_owned()))?;
        self.trace(id, start_time, end_time, rng)
    }

    /// Generate a trace from `start` between `start_time` and `end_time`
    /// (default: one day after `start_time`).
    ///
    /// Running out of eligible routes ends the trace early and is reported
    /// through [`Trace::outcome`], not as an error.
    pub fn trace(
        &self,
        start:      LocationId,
        start_time: NaiveDateTime,
        end_time:   Option<NaiveDateTime>,
        rng:        &mut TraceRng,
    ) -> EngineResult<Trace> {
        self.trace_with(start, start_time, end_time, rng, &mut NoopObserver)
    }

    /// Like [`trace`][Self::trace], reporting progress to `observer`.
    pub fn trace_with<O: TraceObserver>(
        &self,
        start:      LocationId,
        start_time: NaiveDateTime,
        end_time:   Option<NaiveDateTime>,
        rng:        &mut TraceRng,
        observer:   &mut O,
    ) -> EngineResult<Trace> {
        if !self.map.contains(start) {
            return Err(EngineError::UnknownStartLocation(start.to_string()));
        }
        let end_time = match end_time {
            Some(t) => t,
            None => start_time
                .checked_add_signed(TimeDelta::days(1))
                .ok_or(EngineError::TimeOverflow(start_time))?,
        };

        info!(
            start = self.map.name_of(start),
            from = %start_time,
            until = %end_time,
            "trace started"
        );

        let mut cursor = Cursor { now: start_time, pings: Vec::new(), observer };
        let mut here = start;
        // Locations reached and routes followed since simulated time last
        // moved forward.
        let mut stalled: Vec<LocationId> = Vec::new();
        let mut stalled_routes: Vec<&Route> = Vec::new();
        let mut outcome = TraceOutcome::Completed;

        while cursor.now < end_time {
            if self.config.detect_stalls {
                if !stalled.contains(&here) {
                    stalled.push(here);
                } else if !self.can_pass_time(&stalled_routes) {
                    // Back where we were, and no stop on the cycle can ever
                    // draw a non-zero dwell.
                    return Err(EngineError::NoProgress {
                        location: self.map.name_of(here).to_owned(),
                        at:       cursor.now,
                    });
                }
            }

            let route = match choose_route(weekday_index(cursor.now), here, self.map) {
                Ok(route) => route,
                Err(_) => {
                    info!(location = self.map.name_of(here), at = %cursor.now, "no eligible route, trace ends early");
                    outcome = TraceOutcome::RouteExhausted {
                        location: self.map.name_of(here).to_owned(),
                        at:       cursor.now,
                    };
                    break;
                }
            };

            let departed = cursor.now;
            self.follow(route, &mut cursor, rng)?;
            if cursor.now > departed {
                stalled.clear();
                stalled_routes.clear();
            } else if self.config.detect_stalls
                && !stalled_routes.iter().any(|r| std::ptr::eq(*r, route))
            {
                stalled_routes.push(route);
            }
            here = route.end;
        }

        cursor.observer.on_trace_end(&outcome, cursor.pings.len());
        info!(pings = cursor.pings.len(), finished_at = %cursor.now, "trace finished");

        Ok(Trace { pings: cursor.pings, outcome, finished_at: cursor.now })
    }

    /// Traverse one route: dwell at the start, pass each waypoint, dwell at
    /// the end.
    fn follow<O: TraceObserver>(
        &self,
        route:  &Route,
        cursor: &mut Cursor<'_, O>,
        rng:    &mut TraceRng,
    ) -> EngineResult<()> {
        debug!(route = %route.name, at = %cursor.now, "route chosen");
        cursor.observer.on_route_chosen(cursor.now, route);

        self.dwell(route.start, cursor, rng)?;

        for &wp in &route.waypoints {
            // One instantaneous observation, stamped with the arrival time.
            cursor.emit(wp, cursor.now);
            let secs = self.draw(wp, rng);
            cursor.advance(secs)?;
        }

        self.dwell(route.end, cursor, rng)
    }

    /// Draw a dwell for `location`, ping every interval across
    /// `[now, now + dwell)`, then move `now` past the dwell.
    fn dwell<O: TraceObserver>(
        &self,
        location: LocationId,
        cursor:   &mut Cursor<'_, O>,
        rng:      &mut TraceRng,
    ) -> EngineResult<()> {
        let secs = self.draw(location, rng);
        let arrived = cursor.now;
        cursor.advance(secs)?;

        let interval = self.config.ping_interval_secs;
        let mut offset = 0u32;
        while offset < secs {
            cursor.emit(location, arrived + TimeDelta::seconds(i64::from(offset)));
            match offset.checked_add(interval) {
                Some(next) => offset = next,
                None => break,
            }
        }
        Ok(())
    }

    /// `true` if some stop on `routes` has a dwell range above zero.
    fn can_pass_time(&self, routes: &[&Route]) -> bool {
        routes.iter().flat_map(|r| r.stops()).any(|id| {
            self.map.location(id).is_some_and(|l| l.dwell.max_secs > 0)
        })
    }

    fn draw(&self, location: LocationId, rng: &mut TraceRng) -> u32 {
        self.map
            .location(location)
            .map_or(0, |l| l.random_dwell(rng))
    }
}
