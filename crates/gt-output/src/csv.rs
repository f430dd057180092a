//! CSV output backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{OutputResult, PingRow};

/// Writes pings as `user_id,latitude,longitude,timestamp` records.
pub struct CsvWriter<W: Write> {
    out:      Writer<W>,
    rows:     u64,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any `Write` sink.
    pub fn from_writer(sink: W) -> Self {
        Self {
            out:      WriterBuilder::new().has_headers(false).from_writer(sink),
            rows:     0,
            finished: false,
        }
    }

    /// Records written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.out.flush()?;
        self.out
            .into_inner()
            .map_err(|e| crate::OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_pings(&mut self, rows: &[PingRow]) -> OutputResult<()> {
        for row in rows {
            self.out.write_record(&[
                row.user_id.clone(),
                row.latitude.to_string(),
                row.longitude.to_string(),
                row.timestamp.clone(),
            ])?;
        }
        self.rows += rows.len() as u64;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
