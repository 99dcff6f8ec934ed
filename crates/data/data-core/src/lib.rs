//! Data Core
//!
//! Implementations for loading the raw export, deriving the star schema and
//! writing its tables.

pub mod aggregate;
pub mod builder;
pub mod coerce;
pub mod loader;
pub mod writer;

// Re-export SPI types used by every caller
pub use data_spi::{
    CustomerRecord, DataError, DateRecord, OrderRecord, ProductRecord, RawRecord, RecordSource,
    Result, StarSchema, TableRow, TableSink,
};

// Re-export main types
pub use aggregate::sales_by_date;
pub use builder::{
    build_customers, build_dates, build_orders, build_products, build_star_schema, RejectedField,
};
pub use loader::{load_records, CsvFileSource};
pub use writer::{write_star_schema, CsvDirectorySink};
