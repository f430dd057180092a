//! `gt-output` — trace writers for the gpstrace generator.
//!
//! One record per ping, no header row:
//!
//! ```csv
//! user-17,52.2297,21.0122,2024-01-01 08:00:00
//! user-17,52.2297,21.0122,2024-01-01 08:10:00
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use gt_output::{CsvWriter, OutputWriter, PingRow};
//!
//! let mut writer = CsvWriter::create(Path::new("gpstrace.csv"))?;
//! writer.write_pings(&PingRow::from_trace("user-17", &trace, &map))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::PingRow;
pub use writer::OutputWriter;
