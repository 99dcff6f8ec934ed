//! Order fact record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contract::TableRow;

/// One transactional fact row.
///
/// Quantity and discount are carried as source text; only the measures the
/// forecast depends on are coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "Order ID")]
    pub order_id: String,
    #[serde(rename = "Order Date")]
    pub order_date: NaiveDate,
    #[serde(rename = "Ship Date")]
    pub ship_date: NaiveDate,
    #[serde(rename = "Ship Mode")]
    pub ship_mode: String,
    #[serde(rename = "Customer ID")]
    pub customer_id: String,
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Discount")]
    pub discount: String,
    #[serde(rename = "Profit")]
    pub profit: f64,
}

/// Hashable identity of an [`OrderRecord`], floats compared bitwise.
pub type OrderKey = (
    String,
    NaiveDate,
    NaiveDate,
    String,
    String,
    String,
    u64,
    String,
    String,
    u64,
);

impl OrderRecord {
    /// Key used for duplicate detection.
    pub fn key(&self) -> OrderKey {
        (
            self.order_id.clone(),
            self.order_date,
            self.ship_date,
            self.ship_mode.clone(),
            self.customer_id.clone(),
            self.product_id.clone(),
            normalize_zero(self.sales).to_bits(),
            self.quantity.clone(),
            self.discount.clone(),
            normalize_zero(self.profit).to_bits(),
        )
    }
}

// -0.0 and 0.0 are the same amount
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl TableRow for OrderRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Order ID",
        "Order Date",
        "Ship Date",
        "Ship Mode",
        "Customer ID",
        "Product ID",
        "Sales",
        "Quantity",
        "Discount",
        "Profit",
    ];
}
