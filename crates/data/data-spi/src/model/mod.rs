//! Model module containing data structures

mod calendar_date;
mod customer;
mod order;
mod product;
mod raw_record;
mod star_schema;

pub use calendar_date::DateRecord;
pub use customer::CustomerRecord;
pub use order::{OrderKey, OrderRecord};
pub use product::ProductRecord;
pub use raw_record::{RawRecord, RAW_COLUMNS, RAW_FIELD_COUNT};
pub use star_schema::StarSchema;
