//! Raw transaction record model

use crate::error::{DataError, Result};

/// Number of positional fields in a raw transaction line.
pub const RAW_FIELD_COUNT: usize = 21;

/// Canonical column names, in positional order.
pub const RAW_COLUMNS: [&str; RAW_FIELD_COUNT] = [
    "Row ID",
    "Order ID",
    "Order Date",
    "Ship Date",
    "Ship Mode",
    "Customer ID",
    "Customer Name",
    "Segment",
    "Country",
    "City",
    "State",
    "Postal Code",
    "Region",
    "Product ID",
    "Category",
    "Sub-Category",
    "Product Name",
    "Sales",
    "Quantity",
    "Discount",
    "Profit",
];

/// One line of the source export, fields kept as text.
///
/// Nothing is parsed at this stage; coercion happens when the fact table is
/// derived, so a bad value only ever costs its own row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    pub row_id: String,
    pub order_id: String,
    pub order_date: String,
    pub ship_date: String,
    pub ship_mode: String,
    pub customer_id: String,
    pub customer_name: String,
    pub segment: String,
    pub country: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub region: String,
    pub product_id: String,
    pub category: String,
    pub sub_category: String,
    pub product_name: String,
    pub sales: String,
    pub quantity: String,
    pub discount: String,
    pub profit: String,
}

impl RawRecord {
    /// Assign column names positionally.
    ///
    /// `line` is only used for the error message.
    pub fn from_fields<S: AsRef<str>>(fields: &[S], line: u64) -> Result<Self> {
        if fields.len() != RAW_FIELD_COUNT {
            return Err(DataError::FieldCount {
                line,
                expected: RAW_FIELD_COUNT,
                actual: fields.len(),
            });
        }

        let f = |i: usize| fields[i].as_ref().to_string();
        Ok(Self {
            row_id: f(0),
            order_id: f(1),
            order_date: f(2),
            ship_date: f(3),
            ship_mode: f(4),
            customer_id: f(5),
            customer_name: f(6),
            segment: f(7),
            country: f(8),
            city: f(9),
            state: f(10),
            postal_code: f(11),
            region: f(12),
            product_id: f(13),
            category: f(14),
            sub_category: f(15),
            product_name: f(16),
            sales: f(17),
            quantity: f(18),
            discount: f(19),
            profit: f(20),
        })
    }
}
