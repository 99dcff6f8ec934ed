//! Contract module containing trait definitions for data operations

mod record_source;
mod table_row;
mod table_sink;

pub use record_source::RecordSource;
pub use table_row::TableRow;
pub use table_sink::TableSink;
