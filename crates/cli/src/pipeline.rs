//! Load, reshape, write, forecast.

use std::path::PathBuf;

use anyhow::Context;
use data_facade::{
    build_star_schema, load_records, sales_by_date, write_star_schema, CsvDirectorySink,
    ExportConfig,
};
use forecast_facade::{run_forecast, write_forecast_csv, ForecastConfig, TimeSeries};
use tracing::{info, warn};

use crate::plot;

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub export: ExportConfig,
    /// `None` skips the forecast stage
    pub forecast: Option<ForecastConfig>,
    pub plot: bool,
}

/// Run every stage in order and return the files written.
///
/// Nothing is written until the input has been read, so a missing input
/// leaves the output directory untouched.
pub fn run(settings: &RunSettings) -> anyhow::Result<Vec<PathBuf>> {
    let export = &settings.export;
    let records = load_records(export.input_path())?;

    let schema = build_star_schema(&records);
    let mut sink = CsvDirectorySink::new(&export.output_dir);
    let mut written = write_star_schema(&schema, &export.files, &mut sink)
        .context("failed to write star schema tables")?;

    let Some(config) = &settings.forecast else {
        info!("Forecast skipped");
        return Ok(written);
    };

    let series = TimeSeries::from_pairs(sales_by_date(&schema.orders))
        .context("failed to build the daily sales series")?;
    let forecast = run_forecast(config, &series).context("forecast failed")?;

    let path = export.forecast_path();
    write_forecast_csv(&path, &forecast)?;
    written.push(path);

    if settings.plot {
        if let Err(err) = plot::render_forecast(&series, &forecast) {
            warn!("Could not draw the forecast: {:#}", err);
        }
    }

    Ok(written)
}
