//! gpstrace — write a synthetic GPS trace for one traveler to CSV.
//!
//! ```text
//! gpstrace <user_id> <start_location> [<start_time>] [<end_time>]
//!          [--config gpstrace.cfg] [--output gpstrace.csv] [--seed N]
//! ```
//!
//! Times use `YYYY-MM-DD HH:MM:SS`.  The start time defaults to now and the
//! end time to one day after the start.  `apps/gpstrace/demo.cfg` is a small
//! weekday/weekend example map.  Set `RUST_LOG=debug` to log every
//! chosen route.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gt_config::load_map_file;
use gt_core::time::{parse_timestamp, truncate_to_secs};
use gt_core::{PING_INTERVAL_SECS, TraceRng, TravelMap};
use gt_engine::{EngineError, PingEvent, TraceConfig, TraceEngine, TraceObserver, TraceOutcome};
use gt_output::{CsvWriter, OutputWriter, PingRow};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "gpstrace", version, about = "Simulate a GPS travel trace from routes and locations")]
struct Args {
    /// Identifier written in the first column of every record.
    user_id: String,

    /// Name of the location the traveler starts at.
    start_location: String,

    /// Start time, `YYYY-MM-DD HH:MM:SS` (default: now).
    #[arg(value_parser = parse_time)]
    start_time: Option<NaiveDateTime>,

    /// End time, `YYYY-MM-DD HH:MM:SS` (default: start + 1 day).
    #[arg(value_parser = parse_time)]
    end_time: Option<NaiveDateTime>,

    /// Location/route description.
    #[arg(long, default_value = "gpstrace.cfg")]
    config: PathBuf,

    /// CSV file to write.
    #[arg(long, default_value = "gpstrace.csv")]
    output: PathBuf,

    /// RNG seed for reproducible traces (default: OS entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds between pings while dwelling at a route's start or end.
    #[arg(long, default_value_t = PING_INTERVAL_SECS)]
    ping_interval: u32,
}

fn parse_time(s: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(s).map_err(|e| e.to_string())
}

// ── Observer: distance and route tally ────────────────────────────────────────

struct Summary<'m> {
    map:        &'m TravelMap,
    routes:     usize,
    distance_m: f64,
    last:       Option<PingEvent>,
}

impl<'m> Summary<'m> {
    fn new(map: &'m TravelMap) -> Self {
        Self { map, routes: 0, distance_m: 0.0, last: None }
    }
}

impl TraceObserver for Summary<'_> {
    fn on_route_chosen(&mut self, _at: NaiveDateTime, _route: &gt_core::Route) {
        self.routes += 1;
    }

    fn on_ping(&mut self, ping: &PingEvent) {
        if let Some(prev) = self.last {
            if let (Some(a), Some(b)) = (self.map.location(prev.location), self.map.location(ping.location)) {
                self.distance_m += a.point.distance_m(b.point);
            }
        }
        self.last = Some(*ping);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Load locations and routes.
    let map = load_map_file(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    info!(
        locations = map.location_count(),
        routes = map.route_count(),
        config = %args.config.display(),
        "map loaded"
    );

    // 2. Resolve the run window.
    let start_time = args
        .start_time
        .unwrap_or_else(|| truncate_to_secs(Local::now().naive_local()));

    // 3. Trace.
    let config = TraceConfig { ping_interval_secs: args.ping_interval, ..TraceConfig::default() };
    let engine = TraceEngine::new(&map, config)?;
    let start = map
        .lookup(&args.start_location)
        .ok_or_else(|| EngineError::UnknownStartLocation(args.start_location.clone()))?;
    let mut rng = match args.seed {
        Some(seed) => TraceRng::new(seed),
        None => TraceRng::from_entropy(),
    };

    let t0 = Instant::now();
    let mut summary = Summary::new(&map);
    let trace = engine.trace_with(start, start_time, args.end_time, &mut rng, &mut summary)?;
    let elapsed = t0.elapsed();

    // 4. Write CSV.
    let mut writer = CsvWriter::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_pings(&PingRow::from_trace(&args.user_id, &trace, &map))?;
    writer.finish()?;

    // 5. Summary.
    println!("Trace generated in {:.3} s", elapsed.as_secs_f64());
    println!("  routes followed : {}", summary.routes);
    println!("  pings written   : {} -> {}", writer.rows_written(), args.output.display());
    println!("  distance        : {:.1} km", summary.distance_m / 1_000.0);
    match &trace.outcome {
        TraceOutcome::Completed => println!("  finished at     : {}", trace.finished_at),
        TraceOutcome::RouteExhausted { location, at } => {
            println!("  stopped early   : no route from {location:?} at {at}")
        }
    }

    Ok(())
}
