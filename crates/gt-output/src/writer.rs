//! The `OutputWriter` trait implemented by trace writers.

use crate::{OutputResult, PingRow};

pub trait OutputWriter {
    /// Append a batch of pings.
    fn write_pings(&mut self, rows: &[PingRow]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
