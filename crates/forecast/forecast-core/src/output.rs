//! Forecast table output

use std::path::Path;

use forecast_spi::{ForecastError, ForecastPoint, Result};
use tracing::info;

/// Write forecast rows to `path` as CSV with a `ds,yhat,yhat_lower,yhat_upper` header.
pub fn write_forecast_csv(path: &Path, points: &[ForecastPoint]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ForecastError::io(path, e))?;

    writer
        .write_record(ForecastPoint::COLUMNS)
        .map_err(|e| ForecastError::io(path, e))?;
    for point in points {
        writer
            .serialize(point)
            .map_err(|e| ForecastError::io(path, e))?;
    }
    writer.flush().map_err(|e| ForecastError::io(path, e))?;

    info!(path = %path.display(), rows = points.len(), "Created forecast");
    Ok(())
}
