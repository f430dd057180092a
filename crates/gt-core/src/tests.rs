//! Unit tests for gt-core primitives.

#[cfg(test)]
mod ids {
    use crate::LocationId;

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(52.2297, 21.0122);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn checked_rejects_nan() {
        assert!(GeoPoint::checked(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::checked(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::checked(-33.9, 151.2).is_ok());
    }
}

#[cfg(test)]
mod location {
    use crate::{DwellRange, Location, TraceRng};

    #[test]
    fn fixed_dwell_is_deterministic() {
        let loc = Location::new("cafe", 1.0, 2.0, DwellRange::fixed(900)).unwrap();
        let mut rng = TraceRng::new(7);
        for _ in 0..50 {
            assert_eq!(loc.random_dwell(&mut rng), 900);
        }
    }

    #[test]
    fn random_dwell_in_bounds() {
        let loc = Location::new("park", 1.0, 2.0, DwellRange::new(60, 120).unwrap()).unwrap();
        let mut rng = TraceRng::new(1);
        for _ in 0..1000 {
            let d = loc.random_dwell(&mut rng);
            assert!((60..=120).contains(&d), "got {d}");
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let loc = Location::new("gym", 0.0, 0.0, DwellRange::new(0, 10_000).unwrap()).unwrap();
        let mut r1 = TraceRng::new(99);
        let mut r2 = TraceRng::new(99);
        for _ in 0..100 {
            assert_eq!(loc.random_dwell(&mut r1), loc.random_dwell(&mut r2));
        }
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(DwellRange::new(10, 5).is_err());
        assert_eq!(DwellRange::default(), DwellRange::ZERO);
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        assert!(Location::new("x", f64::NAN, 0.0, DwellRange::ZERO).is_err());
    }
}

#[cfg(test)]
mod route {
    use crate::{LocationId, Route, Weekdays};

    #[test]
    fn weekdays_all_is_monday_to_sunday() {
        let all: Vec<u8> = Weekdays::ALL.iter().collect();
        assert_eq!(all, [0, 1, 2, 3, 4, 5, 6]);
        assert!(!Weekdays::ALL.contains(7));
        assert_eq!(Weekdays::default(), Weekdays::ALL);
    }

    #[test]
    fn weekdays_from_days() {
        let wd = Weekdays::from_days([0, 4]).unwrap();
        assert!(wd.contains(0));
        assert!(wd.contains(4));
        assert!(!wd.contains(5));
        assert!(Weekdays::from_days([7]).is_err());
        assert!(Weekdays::NONE.is_empty());
    }

    #[test]
    fn probability_bounds() {
        let (a, b) = (LocationId(0), LocationId(1));
        assert!(Route::new("r", a, b, vec![], 0.0, Weekdays::ALL).is_ok());
        assert!(Route::new("r", a, b, vec![], 1.0, Weekdays::ALL).is_ok());
        assert!(Route::new("r", a, b, vec![], 1.5, Weekdays::ALL).is_err());
        assert!(Route::new("r", a, b, vec![], -0.1, Weekdays::ALL).is_err());
        assert!(Route::new("r", a, b, vec![], f64::NAN, Weekdays::ALL).is_err());
    }

    #[test]
    fn eligibility() {
        let mut r = Route::direct("r", LocationId(0), LocationId(1));
        r.active_weekdays = Weekdays::from_days([1]).unwrap();
        assert!(r.is_eligible(LocationId(0), 1));
        assert!(!r.is_eligible(LocationId(0), 2));
        assert!(!r.is_eligible(LocationId(1), 1));
    }

    #[test]
    fn stops_in_order() {
        let mut r = Route::direct("r", LocationId(0), LocationId(3));
        r.waypoints = vec![LocationId(2), LocationId(1)];
        let stops: Vec<u32> = r.stops().map(|id| id.0).collect();
        assert_eq!(stops, [0, 2, 1, 3]);
    }
}

#[cfg(test)]
mod map {
    use crate::{CoreError, DwellRange, Location, LocationId, Route, TravelMapBuilder};

    fn loc(name: &str) -> Location {
        Location::new(name, 0.0, 0.0, DwellRange::ZERO).unwrap()
    }

    #[test]
    fn lookup_by_name() {
        let mut b = TravelMapBuilder::new();
        let a = b.add_location(loc("a")).unwrap();
        let c = b.add_location(loc("c")).unwrap();
        let map = b.build();
        assert_eq!(map.lookup("a"), Some(a));
        assert_eq!(map.lookup("c"), Some(c));
        assert_eq!(map.lookup("b"), None);
        assert_eq!(map.name_of(c), "c");
    }

    #[test]
    fn duplicate_location_rejected() {
        let mut b = TravelMapBuilder::new();
        b.add_location(loc("a")).unwrap();
        assert_eq!(
            b.add_location(loc("a")),
            Err(CoreError::DuplicateLocation("a".into()))
        );
    }

    #[test]
    fn dangling_endpoint_rejected() {
        let mut b = TravelMapBuilder::new();
        let a = b.add_location(loc("a")).unwrap();
        let err = b.add_route(Route::direct("r", a, LocationId(9))).unwrap_err();
        assert!(matches!(err, CoreError::InvalidLocationReference { ref route, .. } if route == "r"));
    }

    #[test]
    fn dangling_waypoint_reports_index() {
        let mut b = TravelMapBuilder::new();
        let a = b.add_location(loc("a")).unwrap();
        let c = b.add_location(loc("c")).unwrap();
        let mut r = Route::direct("via", a, c);
        r.waypoints = vec![c, LocationId(5)];
        assert_eq!(
            b.add_route(r),
            Err(CoreError::InvalidWaypoint { route: "via".into(), index: 1 })
        );
    }

    #[test]
    fn out_of_range_probability_rejected_on_add() {
        let mut b = TravelMapBuilder::new();
        let a = b.add_location(loc("a")).unwrap();
        let mut r = Route::direct("r", a, a);
        r.probability = 2.0;
        assert!(b.add_route(r).is_err());
    }

    #[test]
    fn resolve_unknown_names_route() {
        let b = TravelMapBuilder::new();
        assert_eq!(
            b.resolve("commute", "nowhere"),
            Err(CoreError::InvalidLocationReference {
                route:    "commute".into(),
                location: "nowhere".into(),
            })
        );
    }

    #[test]
    fn routes_keep_insertion_order() {
        let mut b = TravelMapBuilder::new();
        let a = b.add_location(loc("a")).unwrap();
        for name in ["first", "second", "third"] {
            b.add_route(Route::direct(name, a, a)).unwrap();
        }
        let map = b.build();
        let names: Vec<&str> = map.routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}

#[cfg(test)]
mod parse {
    use crate::parse::{parse_duration, parse_dwell_range, parse_probability, parse_weekdays};
    use crate::{DwellRange, Weekdays};

    #[test]
    fn duration_units() {
        assert_eq!(parse_duration("45").unwrap(), 45);
        assert_eq!(parse_duration("45s").unwrap(), 45);
        assert_eq!(parse_duration("10m").unwrap(), 600);
        assert_eq!(parse_duration("2h").unwrap(), 7_200);
        assert_eq!(parse_duration(" 3 h ").unwrap(), 10_800);
    }

    #[test]
    fn duration_rejects_garbage() {
        for bad in ["", "h", "-5", "+5", "+5m", "1.5h", "10d", "ten"] {
            assert!(parse_duration(bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn dwell_range() {
        assert_eq!(
            parse_dwell_range("30m, 1h", "home").unwrap(),
            DwellRange { min_secs: 1_800, max_secs: 3_600 }
        );
        assert!(parse_dwell_range("30m", "home").is_err());
        assert!(parse_dwell_range("1,2,3", "home").is_err());
        assert!(parse_dwell_range("2h,1h", "home").is_err());
        assert!(parse_dwell_range("+5m, 10m", "home").is_err());
    }

    #[test]
    fn weekday_list() {
        assert_eq!(parse_weekdays("0, 1,2", "r").unwrap(), Weekdays::from_days([0, 1, 2]).unwrap());
        assert!(parse_weekdays("7", "r").is_err());
        assert!(parse_weekdays("+3", "r").is_err());
        assert!(parse_weekdays("0,-1", "r").is_err());
        assert!(parse_weekdays("mon", "r").is_err());
        assert!(parse_weekdays("", "r").is_err());
    }

    #[test]
    fn probability() {
        assert_eq!(parse_probability("0.25", "r").unwrap(), 0.25);
        assert!(parse_probability("1.01", "r").is_err());
        assert!(parse_probability("NaN", "r").is_err());
    }
}

#[cfg(test)]
mod time {
    use chrono::NaiveDate;

    use crate::time::{format_timestamp, parse_timestamp, weekday_index};

    #[test]
    fn parse_and_format() {
        let t = parse_timestamp("2024-01-01 08:30:00").unwrap();
        assert_eq!(format_timestamp(t), "2024-01-01 08:30:00");
        assert!(parse_timestamp("2024-01-01T08:30").is_err());
    }

    #[test]
    fn format_truncates_subseconds() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(12, 0, 5, 999)
            .unwrap();
        assert_eq!(format_timestamp(t), "2024-01-01 12:00:05");
    }

    #[test]
    fn monday_is_zero() {
        // 2024-01-01 was a Monday.
        assert_eq!(weekday_index(parse_timestamp("2024-01-01 00:00:00").unwrap()), 0);
        assert_eq!(weekday_index(parse_timestamp("2024-01-07 23:59:59").unwrap()), 6);
    }
}

#[cfg(test)]
mod rng {
    use crate::TraceRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TraceRng::new(12345);
        let mut r2 = TraceRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0u32..1_000_000), r2.gen_range(0u32..1_000_000));
        }
    }

    #[test]
    fn gen_range_inclusive_bounds() {
        let mut rng = TraceRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(5u32..=6);
            assert!((5..=6).contains(&v));
        }
    }
}
