//! Export configuration types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Input file the export reads when nothing else is given.
pub const DEFAULT_INPUT_PATH: &str = "Sample - Superstore.csv";

/// File names of the generated tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub orders: String,
    pub products: String,
    pub customers: String,
    pub dates: String,
    pub forecast: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            orders: "superstore_orders.csv".to_string(),
            products: "superstore_products.csv".to_string(),
            customers: "superstore_customers.csv".to_string(),
            dates: "superstore_dates.csv".to_string(),
            forecast: "superstore_forecast.csv".to_string(),
        }
    }
}

/// Where the export reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Raw transactions file
    pub input: PathBuf,
    /// Directory receiving every output table
    pub output_dir: PathBuf,
    /// Output file names
    pub files: OutputFiles,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from("."),
            files: OutputFiles::default(),
        }
    }
}

impl ExportConfig {
    /// Create a configuration for the given input, writing next to the working directory.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Full path of an output file.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Full path of the forecast output.
    pub fn forecast_path(&self) -> PathBuf {
        self.output_path(&self.files.forecast)
    }

    /// Input path as given.
    pub fn input_path(&self) -> &Path {
        &self.input
    }
}

/// Builder for ExportConfig.
#[derive(Debug, Default)]
pub struct ExportConfigBuilder {
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    files: Option<OutputFiles>,
}

impl ExportConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input file.
    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Override the output file names.
    pub fn files(mut self, files: OutputFiles) -> Self {
        self.files = Some(files);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ExportConfig {
        let defaults = ExportConfig::default();
        ExportConfig {
            input: self.input.unwrap_or(defaults.input),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            files: self.files.unwrap_or(defaults.files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.input, PathBuf::from("Sample - Superstore.csv"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.files.orders, "superstore_orders.csv");
        assert_eq!(config.files.forecast, "superstore_forecast.csv");
    }

    #[test]
    fn test_output_path() {
        let config = ExportConfig {
            output_dir: PathBuf::from("out"),
            ..ExportConfig::default()
        };
        assert_eq!(
            config.output_path(&config.files.dates),
            PathBuf::from("out").join("superstore_dates.csv")
        );
        assert_eq!(
            config.forecast_path(),
            PathBuf::from("out").join("superstore_forecast.csv")
        );
    }

    #[test]
    fn test_builder() {
        let config = ExportConfigBuilder::new()
            .input("data/raw.csv")
            .output_dir("exports")
            .build();
        assert_eq!(config.input_path(), Path::new("data/raw.csv"));
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.files, OutputFiles::default());
    }

    #[test]
    fn test_builder_defaults() {
        assert_eq!(ExportConfigBuilder::new().build(), ExportConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config: ExportConfig =
            serde_json::from_str(r#"{"output_dir": "bi", "files": {"orders": "fact.csv"}}"#)
                .unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_dir, PathBuf::from("bi"));
        assert_eq!(config.files.orders, "fact.csv");
        assert_eq!(config.files.products, "superstore_products.csv");
    }
}
