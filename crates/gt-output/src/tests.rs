//! Unit tests for gt-output.

#[cfg(test)]
mod csv_tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use gt_core::{DwellRange, Location, TravelMapBuilder};
    use gt_engine::{PingEvent, Trace, TraceOutcome};

    use crate::csv::CsvWriter;
    use crate::row::PingRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(ts: &str) -> PingRow {
        PingRow {
            user_id:   "u1".into(),
            latitude:  52.5,
            longitude: -1.25,
            timestamp: ts.into(),
        }
    }

    #[test]
    fn file_created_without_header() {
        let dir = tmp();
        let path = dir.path().join("gpstrace.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.finish().unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn records_in_order() {
        let dir = tmp();
        let path = dir.path().join("gpstrace.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.write_pings(&[row("2024-01-01 00:00:00"), row("2024-01-01 00:10:00")]).unwrap();
        w.finish().unwrap();
        assert_eq!(w.rows_written(), 2);

        let mut rdr = csv::ReaderBuilder::new().has_headers(false).from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "u1");
        assert_eq!(&rows[0][1], "52.5");
        assert_eq!(&rows[0][2], "-1.25");
        assert_eq!(&rows[1][3], "2024-01-01 00:10:00");
    }

    #[test]
    fn in_memory_sink() {
        let mut w = CsvWriter::from_writer(Vec::new());
        w.write_pings(&[row("2024-01-01 00:00:00")]).unwrap();
        let bytes = w.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "u1,52.5,-1.25,2024-01-01 00:00:00\n");
    }

    #[test]
    fn finish_idempotent() {
        let mut w = CsvWriter::from_writer(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn rows_from_trace() {
        let mut b = TravelMapBuilder::new();
        let home = b
            .add_location(Location::new("home", 1.0, 2.0, DwellRange::ZERO).unwrap())
            .unwrap();
        let map = b.build();

        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(9, 30, 0, 750)
            .unwrap();
        let trace = Trace {
            pings:       vec![PingEvent { location: home, at }],
            outcome:     TraceOutcome::Completed,
            finished_at: at,
        };

        let rows = PingRow::from_trace("traveler", &trace, &map);
        assert_eq!(
            rows,
            vec![PingRow {
                user_id:   "traveler".into(),
                latitude:  1.0,
                longitude: 2.0,
                timestamp: "2024-01-01 09:30:00".into(),
            }]
        );
    }
}
