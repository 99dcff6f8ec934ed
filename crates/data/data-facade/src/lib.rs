//! Data Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for the star schema export:
//! - `data_spi` - Record models, errors and contracts
//! - `data_api` - Export configuration and builder
//! - `data_core` - Loader, schema builder, aggregation and CSV writer
//!
//! # Example
//!
//! ```rust,ignore
//! use data_facade::{
//!     build_star_schema, load_records, write_star_schema, CsvDirectorySink, ExportConfig,
//! };
//!
//! let config = ExportConfig::default();
//! let records = load_records(&config.input)?;
//! let schema = build_star_schema(&records);
//! let mut sink = CsvDirectorySink::new(&config.output_dir);
//! write_star_schema(&schema, &config.files, &mut sink)?;
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
