//! Data Consumer API
//!
//! Configuration types and builders for the star schema export.

pub mod config;

pub use config::{ExportConfig, ExportConfigBuilder, OutputFiles, DEFAULT_INPUT_PATH};

// Re-export SPI types consumers need alongside the configuration
pub use data_spi::{DataError, Result, StarSchema};
