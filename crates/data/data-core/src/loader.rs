//! Raw transaction loading.
//!
//! The export ships as Latin-1 text with a header line that cannot be
//! trusted, so every record is read positionally and the header is recognised
//! by content rather than by position alone.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use data_spi::{DataError, RawRecord, RecordSource, Result, RAW_COLUMNS};
use tracing::{debug, info, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Raw records read from a delimited file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<RawRecord>> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DataError::FileNotFound(self.path.clone()),
            _ => DataError::io(&self.path, e),
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read input file");

        let text = decode_latin1(&bytes);
        let records = parse_records(text.as_bytes())?;
        info!(
            source = %self.name,
            records = records.len(),
            "Raw data loaded with canonical column names"
        );
        Ok(records)
    }
}

/// Load raw records from a file path.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    CsvFileSource::new(path.as_ref()).load()
}

/// Decode ISO-8859-1 bytes. Every byte is a code point, so this cannot fail.
pub fn decode_latin1(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    bytes.iter().copied().map(char::from).collect()
}

/// Parse comma-delimited records and assign the canonical columns.
///
/// The first record is the export's own header line. Its content is never
/// trusted, so it is dropped whatever it says.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = result.map_err(|e| DataError::Csv(e.to_string()))?;
        if index == 0 {
            if !matches_columns(&row) {
                warn!("Unexpected header names; columns are assigned by position");
            }
            debug!(fields = row.len(), "dropping header row");
            continue;
        }

        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);
        let fields: Vec<&str> = row.iter().collect();
        records.push(RawRecord::from_fields(&fields, line)?);
    }

    Ok(records)
}

/// Whether a header line names the canonical columns, ignoring case and padding.
fn matches_columns(header: &csv::StringRecord) -> bool {
    header.len() == RAW_COLUMNS.len()
        && header
            .iter()
            .zip(RAW_COLUMNS)
            .all(|(value, name)| value.trim().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Row ID,Order ID,Order Date,Ship Date,Ship Mode,Customer ID,\
Customer Name,Segment,Country,City,State,Postal Code,Region,Product ID,Category,\
Sub-Category,Product Name,Sales,Quantity,Discount,Profit";

    const ROW: &str = "1,CA-2016-152156,11/8/2016,11/11/2016,Second Class,CG-12520,\
Claire Gute,Consumer,United States,Henderson,Kentucky,42420,South,FUR-BO-10001798,\
Furniture,Bookcases,Bush Somerset Collection Bookcase,261.96,2,0,41.9136";

    #[test]
    fn test_decode_latin1() {
        // "Café" with 0xE9 for é
        assert_eq!(decode_latin1(b"Caf\xE9"), "Café");
        assert_eq!(decode_latin1(b"\xEF\xBB\xBFRow ID"), "Row ID");
    }

    #[test]
    fn test_parse_drops_header() {
        let input = format!("{}\n{}\n", HEADER, ROW);
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_id, "CA-2016-152156");
        assert_eq!(records[0].profit, "41.9136");
    }

    #[test]
    fn test_parse_drops_non_canonical_header() {
        let header = HEADER
            .replace("Sub-Category", "Sub Category")
            .replace("Row ID", "row_id");
        let input = format!("{}\n{}\n", header, ROW);
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_id, "FUR-BO-10001798");
        assert_eq!(records[0].customer_id, "CG-12520");
    }

    #[test]
    fn test_matches_columns() {
        let canonical = csv::StringRecord::from(HEADER.split(',').collect::<Vec<_>>());
        assert!(matches_columns(&canonical));

        let shouting: Vec<String> = RAW_COLUMNS
            .iter()
            .map(|c| format!(" {} ", c.to_uppercase()))
            .collect();
        assert!(matches_columns(&csv::StringRecord::from(shouting)));

        let renamed = HEADER.replace("Sub-Category", "Sub Category");
        assert!(!matches_columns(&csv::StringRecord::from(
            renamed.split(',').collect::<Vec<_>>()
        )));
        assert!(!matches_columns(&csv::StringRecord::from(vec!["Row ID"])));
    }

    #[test]
    fn test_parse_always_drops_first_row() {
        // A short header line is skipped before the field count is checked
        let input = format!("Orders export\n{}\n{}\n", ROW, ROW);
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        assert!(parse_records(HEADER.as_bytes()).unwrap().is_empty());
        assert!(parse_records(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_quoted_fields() {
        let row = ROW.replace(
            "Bush Somerset Collection Bookcase",
            "\"Bretford CR4500 Series Slim Rectangular Table, 60\"\"\"",
        );
        let input = format!("{}\n{}\n", HEADER, row);
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(
            records[0].product_name,
            "Bretford CR4500 Series Slim Rectangular Table, 60\""
        );
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let input = format!("{}\n{}\n1,2,3\n", HEADER, ROW);
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataError::FieldCount {
                line: 3,
                expected: 21,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_load_latin1_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        file.write_all(ROW.replace("Claire Gute", "Ren\u{e9}e").as_bytes())
            .unwrap();
        // re-encode the é as a single Latin-1 byte
        let content = std::fs::read_to_string(file.path()).unwrap();
        let latin1: Vec<u8> = content.chars().map(|c| c as u32 as u8).collect();
        std::fs::write(file.path(), latin1).unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer_name, "Renée");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_source_name() {
        let source = CsvFileSource::new("Sample - Superstore.csv");
        assert_eq!(source.name(), "Sample - Superstore.csv");
        assert_eq!(source.path(), Path::new("Sample - Superstore.csv"));
    }
}
