//! Builds a validated [`TravelMap`] from configuration text.
//!
//! All `Location` sections are loaded before any `Route` section, so a route
//! may name a location defined further down the file.  Routes keep their
//! file order, which decides probability ties at trace time.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use gt_core::parse::{parse_coordinate, parse_dwell_range, parse_probability, parse_weekdays};
use gt_core::{DwellRange, Location, Route, TravelMap, TravelMapBuilder, Weekdays};

use crate::ini::{parse_sections, Section};
use crate::ConfigResult;

const LOCATION_PREFIX: &str = "Location ";
const ROUTE_PREFIX: &str = "Route ";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a map from a configuration file.
pub fn load_map_file(path: &Path) -> ConfigResult<TravelMap> {
    let file = std::fs::File::open(path)?;
    load_map_reader(file)
}

/// Like [`load_map_file`] but accepts any `Read` source.
pub fn load_map_reader<R: Read>(mut reader: R) -> ConfigResult<TravelMap> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_map_str(&text)
}

/// Load a map from configuration text already in memory.
pub fn load_map_str(text: &str) -> ConfigResult<TravelMap> {
    let sections = parse_sections(text)?;
    let mut builder = TravelMapBuilder::new();

    for (name, section) in named(&sections, LOCATION_PREFIX) {
        builder.add_location(location_from_section(name, section)?)?;
    }
    for (name, section) in named(&sections, ROUTE_PREFIX) {
        let route = route_from_section(name, section, &builder)?;
        builder.add_route(route)?;
    }

    let map = builder.build();
    debug!(
        locations = map.location_count(),
        routes = map.route_count(),
        "travel map loaded"
    );
    Ok(map)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Sections whose header starts with `prefix`, paired with the remainder.
fn named<'a>(
    sections: &'a [Section],
    prefix: &'static str,
) -> impl Iterator<Item = (&'a str, &'a Section)> {
    sections
        .iter()
        .filter_map(move |s| s.name.strip_prefix(prefix).map(|name| (name, s)))
}

fn location_from_section(name: &str, section: &Section) -> ConfigResult<Location> {
    let latitude = parse_coordinate(section.require("latitude")?, "latitude", name)?;
    let longitude = parse_coordinate(section.require("longitude")?, "longitude", name)?;
    let dwell = match section.get("visit_time") {
        Some(v) => parse_dwell_range(v, name)?,
        None => DwellRange::ZERO,
    };
    Ok(Location::new(name, latitude, longitude, dwell)?)
}

fn route_from_section(
    name: &str,
    section: &Section,
    builder: &TravelMapBuilder,
) -> ConfigResult<Route> {
    let start = builder.resolve(name, section.require("start_at")?.trim())?;
    let end = builder.resolve(name, section.require("end_at")?.trim())?;

    let waypoints = match section.get("waypoints") {
        Some(list) => list
            .split(',')
            .map(|wp| builder.resolve(name, wp.trim()))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };
    let probability = match section.get("probability") {
        Some(p) => parse_probability(p, name)?,
        None => 1.0,
    };
    let weekdays = match section.get("weekdays") {
        Some(w) => parse_weekdays(w, name)?,
        None => Weekdays::ALL,
    };

    Ok(Route::new(name, start, end, waypoints, probability, weekdays)?)
}
