//! Table sink trait definition.

use std::path::PathBuf;

use crate::contract::TableRow;
use crate::error::Result;

/// Destination for finished tables.
pub trait TableSink {
    /// Write `rows` under `name`, replacing any previous table of that name.
    ///
    /// Returns where the table ended up.
    fn write_table<T: TableRow>(&mut self, name: &str, rows: &[T]) -> Result<PathBuf>;
}
