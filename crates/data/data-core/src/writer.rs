//! Flat-file table output.

use std::fs;
use std::path::{Path, PathBuf};

use data_api::OutputFiles;
use data_spi::{DataError, Result, StarSchema, TableRow, TableSink};
use tracing::info;

/// Writes each table as a headered CSV file inside one directory.
#[derive(Debug, Clone)]
pub struct CsvDirectorySink {
    dir: PathBuf,
}

impl CsvDirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TableSink for CsvDirectorySink {
    fn write_table<T: TableRow>(&mut self, name: &str, rows: &[T]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| DataError::io(&self.dir, e))?;
        let path = self.dir.join(name);
        write_csv(&path, rows)?;
        info!(path = %path.display(), rows = rows.len(), "Created table");
        Ok(path)
    }
}

/// Write rows to `path`, header first, truncating any existing file.
pub fn write_csv<T: TableRow>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| DataError::io(path, e))?;

    writer
        .write_record(T::COLUMNS)
        .map_err(|e| DataError::io(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| DataError::io(path, e))?;
    }
    writer.flush().map_err(|e| DataError::io(path, e))?;
    Ok(())
}

/// Write the fact and dimension tables under their configured names.
pub fn write_star_schema<S: TableSink>(
    schema: &StarSchema,
    files: &OutputFiles,
    sink: &mut S,
) -> Result<Vec<PathBuf>> {
    Ok(vec![
        sink.write_table(&files.orders, &schema.orders)?,
        sink.write_table(&files.products, &schema.products)?,
        sink.write_table(&files.customers, &schema.customers)?,
        sink.write_table(&files.dates, &schema.dates)?,
    ])
}
