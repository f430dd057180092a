//! Deterministic route selection.
//!
//! A route is *eligible* when it starts at the current location and is
//! active on the current weekday.  Among eligible routes the one with the
//! strictly highest probability wins; on a tie the incumbent is kept, so the
//! first route in definition order wins.  The running best starts at `0.0`
//! with a strict `>` comparison, which means a probability-0 route is never
//! chosen.

use gt_core::{LocationId, Route, TravelMap};

use crate::{EngineError, EngineResult};

/// All routes eligible at (`weekday`, `current`), in definition order.
pub fn eligible_routes(
    routes:  &[Route],
    weekday: u8,
    current: LocationId,
) -> impl Iterator<Item = &Route> {
    routes.iter().filter(move |r| r.is_eligible(current, weekday))
}

/// Pick the route to take from `current` on `weekday`, or `None`.
pub fn select_route(routes: &[Route], weekday: u8, current: LocationId) -> Option<&Route> {
    let mut best: Option<&Route> = None;
    let mut max_probability = 0.0;

    for route in eligible_routes(routes, weekday, current) {
        if route.probability > max_probability {
            max_probability = route.probability;
            best = Some(route);
        }
    }
    best
}

/// Like [`select_route`] over `map`'s routes, failing with
/// [`EngineError::NoRouteAvailable`] (carrying the location's name) when
/// nothing is eligible.
pub fn choose_route(weekday: u8, current: LocationId, map: &TravelMap) -> EngineResult<&Route> {
    select_route(map.routes(), weekday, current).ok_or_else(|| EngineError::NoRouteAvailable {
        location: map.name_of(current).to_owned(),
    })
}
