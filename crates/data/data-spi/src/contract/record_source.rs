//! Record source trait definition.

use crate::error::Result;
use crate::model::RawRecord;

/// Anything that can hand over the raw transaction lines.
pub trait RecordSource {
    /// Source name, used in log lines.
    fn name(&self) -> &str;

    /// Load every record, header line already removed.
    fn load(&self) -> Result<Vec<RawRecord>>;
}

impl RecordSource for Vec<RawRecord> {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Vec<RawRecord>> {
        Ok(self.clone())
    }
}
