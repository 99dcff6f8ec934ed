//! Product dimension record model

use serde::{Deserialize, Serialize};

use crate::contract::TableRow;
use crate::model::RawRecord;

/// One distinct product attribute combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub-Category")]
    pub sub_category: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
}

impl From<&RawRecord> for ProductRecord {
    fn from(raw: &RawRecord) -> Self {
        Self {
            product_id: raw.product_id.clone(),
            category: raw.category.clone(),
            sub_category: raw.sub_category.clone(),
            product_name: raw.product_name.clone(),
        }
    }
}

impl TableRow for ProductRecord {
    const COLUMNS: &'static [&'static str] =
        &["Product ID", "Category", "Sub-Category", "Product Name"];
}
