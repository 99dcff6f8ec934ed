//! Date dimension record model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::contract::TableRow;

/// Calendar attributes of one order date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "MonthNumber")]
    pub month_number: u32,
    #[serde(rename = "MonthName")]
    pub month_name: String,
    #[serde(rename = "Quarter")]
    pub quarter: u32,
}

impl DateRecord {
    /// Derive every calendar attribute from the date alone.
    pub fn from_date(date: NaiveDate) -> Self {
        let month = date.month();
        Self {
            date,
            year: date.year(),
            month_number: month,
            month_name: date.format("%B").to_string(),
            quarter: (month - 1) / 3 + 1,
        }
    }
}

impl From<NaiveDate> for DateRecord {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl TableRow for DateRecord {
    const COLUMNS: &'static [&'static str] =
        &["Date", "Year", "MonthNumber", "MonthName", "Quarter"];
}
