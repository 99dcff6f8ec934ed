//! Fact table aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use data_spi::OrderRecord;

/// Total sales per order date, ascending by date.
///
/// Only dates that carry at least one order appear; calendar gaps stay gaps.
pub fn sales_by_date(orders: &[OrderRecord]) -> Vec<(NaiveDate, f64)> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for order in orders {
        *totals.entry(order.order_date).or_insert(0.0) += order.sales;
    }
    totals.into_iter().collect()
}
