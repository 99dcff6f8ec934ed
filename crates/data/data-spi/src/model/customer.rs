//! Customer dimension record model

use serde::{Deserialize, Serialize};

use crate::contract::TableRow;
use crate::model::RawRecord;

/// One distinct customer and location combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "Customer ID")]
    pub customer_id: String,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Segment")]
    pub segment: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Postal Code")]
    pub postal_code: String,
    #[serde(rename = "Region")]
    pub region: String,
}

impl From<&RawRecord> for CustomerRecord {
    fn from(raw: &RawRecord) -> Self {
        Self {
            customer_id: raw.customer_id.clone(),
            customer_name: raw.customer_name.clone(),
            segment: raw.segment.clone(),
            country: raw.country.clone(),
            city: raw.city.clone(),
            state: raw.state.clone(),
            postal_code: raw.postal_code.clone(),
            region: raw.region.clone(),
        }
    }
}

impl TableRow for CustomerRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Customer ID",
        "Customer Name",
        "Segment",
        "Country",
        "City",
        "State",
        "Postal Code",
        "Region",
    ];
}
