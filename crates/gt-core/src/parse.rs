//! Pure parsers for the textual field formats used by map configuration.
//!
//! Whitespace anywhere inside a value is ignored, so `"1h, 90m"` and
//! `"1h,90m"` are equivalent.

use crate::{CoreError, CoreResult, DwellRange, Weekdays};

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Unsigned decimal integer: digits only, no `+`/`-` sign.
fn parse_unsigned<T: std::str::FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parse a duration into seconds.
///
/// Accepts a non-negative integer with an optional unit suffix:
///
/// | Suffix   | Unit    |
/// |----------|---------|
/// | `h`      | hours   |
/// | `m`      | minutes |
/// | `s`/none | seconds |
pub fn parse_duration(s: &str) -> CoreResult<u32> {
    let s = compact(s);
    let (digits, scale) = match s.char_indices().last() {
        Some((i, 'h')) => (&s[..i], 3_600),
        Some((i, 'm')) => (&s[..i], 60),
        Some((i, 's')) => (&s[..i], 1),
        _ => (s.as_str(), 1),
    };
    parse_unsigned::<u32>(digits)
        .and_then(|n| n.checked_mul(scale))
        .ok_or_else(|| CoreError::InvalidFieldFormat(format!("invalid duration {s:?}")))
}

/// Parse a `"<min>,<max>"` dwell range for `location`.
pub fn parse_dwell_range(s: &str, location: &str) -> CoreResult<DwellRange> {
    let invalid = || {
        CoreError::InvalidFieldFormat(format!(
            "invalid visit_time {s:?} for location {location:?}"
        ))
    };
    let parts: Vec<&str> = s.split(',').collect();
    let [min, max] = parts.as_slice() else {
        return Err(invalid());
    };
    let min = parse_duration(min).map_err(|_| invalid())?;
    let max = parse_duration(max).map_err(|_| invalid())?;
    DwellRange::new(min, max).map_err(|_| invalid())
}

/// Parse a comma-separated weekday list (`0` = Monday … `6` = Sunday) for
/// `route`.
pub fn parse_weekdays(s: &str, route: &str) -> CoreResult<Weekdays> {
    let invalid = || CoreError::InvalidFieldFormat(format!("invalid weekdays {s:?} for route {route:?}"));
    let days = compact(s)
        .split(',')
        .map(|part| parse_unsigned::<u8>(part).ok_or_else(invalid))
        .collect::<CoreResult<Vec<u8>>>()?;
    Weekdays::from_days(days).map_err(|_| invalid())
}

/// Parse a route probability: a finite float in `[0, 1]`.
pub fn parse_probability(s: &str, route: &str) -> CoreResult<f64> {
    compact(s)
        .parse::<f64>()
        .ok()
        .filter(|p| (0.0..=1.0).contains(p))
        .ok_or_else(|| {
            CoreError::InvalidFieldFormat(format!(
                "invalid probability {s:?} for route {route:?}: expected a number in [0.0, 1.0]"
            ))
        })
}

/// Parse a latitude or longitude value.
pub fn parse_coordinate(s: &str, field: &str, location: &str) -> CoreResult<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            CoreError::InvalidFieldFormat(format!(
                "invalid {field} {s:?} for location {location:?}"
            ))
        })
}
