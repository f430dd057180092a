//! The travel map: the location directory plus the ordered route list.
//!
//! # Ordering
//!
//! Routes are kept in insertion order.  Route selection breaks probability
//! ties by taking the first eligible route in this order, so the list must
//! never be reordered or stored in a hashed collection.
//!
//! # Construction
//!
//! ```rust,ignore
//! let mut b = TravelMapBuilder::new();
//! let home = b.add_location(Location::new("home", 52.23, 21.01, DwellRange::fixed(3600))?)?;
//! let work = b.add_location(Location::new("work", 52.25, 21.00, DwellRange::ZERO)?)?;
//! b.add_route(Route::direct("commute", home, work))?;
//! let map = b.build();
//! ```

use std::collections::HashMap;

use crate::{CoreError, CoreResult, Location, LocationId, Route};

// ── TravelMap ─────────────────────────────────────────────────────────────────

/// Immutable, validated set of locations and routes.
///
/// Read-only after [`TravelMapBuilder::build`]; safe to share between any
/// number of concurrent trace runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TravelMap {
    locations: Vec<Location>,
    by_name:   HashMap<String, LocationId>,
    routes:    Vec<Route>,
}

impl TravelMap {
    /// A map with no locations and no routes.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Resolve a location name to its id.
    pub fn lookup(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// All locations, indexed by `LocationId`.
    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All routes, in definition order.
    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[inline]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// `true` if `id` refers to a location in this map.
    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    /// Name of `id`, or `"?"` for an id outside the directory.
    pub fn name_of(&self, id: LocationId) -> &str {
        self.location(id).map_or("?", |l| l.name.as_str())
    }
}

// ── TravelMapBuilder ──────────────────────────────────────────────────────────

/// Incremental, validating builder for [`TravelMap`].
#[derive(Default)]
pub struct TravelMapBuilder {
    map: TravelMap,
}

impl TravelMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location and return its id.  Names must be unique.
    pub fn add_location(&mut self, location: Location) -> CoreResult<LocationId> {
        if self.map.by_name.contains_key(&location.name) {
            return Err(CoreError::DuplicateLocation(location.name));
        }
        let id = LocationId::try_from(self.map.locations.len()).map_err(|_| {
            CoreError::InvalidFieldFormat("too many locations".to_owned())
        })?;
        self.map.by_name.insert(location.name.clone(), id);
        self.map.locations.push(location);
        Ok(id)
    }

    /// Resolve `location` by name on behalf of `route`.
    ///
    /// Used by loaders that see route fields as names; an unknown name is an
    /// [`CoreError::InvalidLocationReference`] naming the route.
    pub fn resolve(&self, route: &str, location: &str) -> CoreResult<LocationId> {
        self.map
            .lookup(location)
            .ok_or_else(|| CoreError::InvalidLocationReference {
                route:    route.to_owned(),
                location: location.to_owned(),
            })
    }

    /// Append a route after checking every id it references.
    pub fn add_route(&mut self, route: Route) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&route.probability) {
            return Err(CoreError::InvalidFieldFormat(format!(
                "probability {} of route {:?} is outside [0.0, 1.0]",
                route.probability, route.name
            )));
        }
        for (field, id) in [("start", route.start), ("end", route.end)] {
            if !self.map.contains(id) {
                return Err(CoreError::InvalidLocationReference {
                    route:    route.name.clone(),
                    location: format!("{field} {id}"),
                });
            }
        }
        if let Some(index) = route.waypoints.iter().position(|&wp| !self.map.contains(wp)) {
            return Err(CoreError::InvalidWaypoint { route: route.name.clone(), index });
        }
        self.map.routes.push(route);
        Ok(())
    }

    pub fn build(self) -> TravelMap {
        self.map
    }
}
