//! Trait for rows that can be written as a flat table.

use serde::Serialize;

/// A serializable row with a fixed header.
///
/// The header is declared up front so an empty table still gets one.
pub trait TableRow: Serialize {
    /// Column names, in the order the row serializes its fields.
    const COLUMNS: &'static [&'static str];
}
