//! Data Service Provider Interface
//!
//! Record models, errors and contracts for turning the flat Superstore
//! export into a star schema.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{RecordSource, TableRow, TableSink};
pub use error::{DataError, Result};
pub use model::{
    CustomerRecord, DateRecord, OrderKey, OrderRecord, ProductRecord, RawRecord, StarSchema,
    RAW_COLUMNS, RAW_FIELD_COUNT,
};
