//! Star schema derivation.
//!
//! Each table is a projection of the raw records. Only the fact table is
//! coerced; a row whose measures or dates do not parse is tagged as rejected
//! and filtered out instead of failing the run.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDate;
use data_spi::{CustomerRecord, DateRecord, OrderRecord, ProductRecord, RawRecord, StarSchema};
use tracing::{debug, info, warn};

use crate::coerce::{parse_date, parse_numeric};

/// Order columns as they appear in the source, before coercion.
type OrderProjection<'a> = [&'a str; 10];

/// Field whose value failed coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedField {
    OrderDate,
    ShipDate,
    Sales,
    Profit,
}

/// Derive all four tables.
pub fn build_star_schema(records: &[RawRecord]) -> StarSchema {
    let orders = build_orders(records);
    let products = build_products(records);
    let customers = build_customers(records);
    let dates = build_dates(&orders);

    info!(
        orders = orders.len(),
        products = products.len(),
        customers = customers.len(),
        dates = dates.len(),
        "Star schema built"
    );

    StarSchema {
        orders,
        products,
        customers,
        dates,
    }
}

/// Fact table: project, dedup, coerce, drop rejects.
pub fn build_orders(records: &[RawRecord]) -> Vec<OrderRecord> {
    let projected = distinct(records.iter().map(project_order));

    let mut rejected = 0usize;
    let coerced = projected.into_iter().filter_map(|row| match coerce_order(row) {
        Ok(order) => Some(order),
        Err(field) => {
            rejected += 1;
            debug!(order_id = row[0], ?field, "dropping order row");
            None
        }
    });
    let orders = distinct_by(coerced, OrderRecord::key);

    if rejected > 0 {
        warn!(rejected, "Dropped order rows whose sales, profit or dates did not parse");
    }
    orders
}

/// Product dimension: distinct product attribute combinations.
pub fn build_products(records: &[RawRecord]) -> Vec<ProductRecord> {
    distinct(records.iter().map(ProductRecord::from))
}

/// Customer dimension: distinct customer and location combinations.
pub fn build_customers(records: &[RawRecord]) -> Vec<CustomerRecord> {
    distinct(records.iter().map(CustomerRecord::from))
}

/// Date dimension: one row per distinct order date, first appearance first.
pub fn build_dates(orders: &[OrderRecord]) -> Vec<DateRecord> {
    distinct(orders.iter().map(|o| o.order_date))
        .into_iter()
        .map(DateRecord::from_date)
        .collect()
}

fn project_order(raw: &RawRecord) -> OrderProjection<'_> {
    [
        &raw.order_id,
        &raw.order_date,
        &raw.ship_date,
        &raw.ship_mode,
        &raw.customer_id,
        &raw.product_id,
        &raw.sales,
        &raw.quantity,
        &raw.discount,
        &raw.profit,
    ]
}

fn coerce_order(row: OrderProjection<'_>) -> Result<OrderRecord, RejectedField> {
    let [
        order_id,
        order_date,
        ship_date,
        ship_mode,
        customer_id,
        product_id,
        sales,
        quantity,
        discount,
        profit,
    ] = row;

    Ok(OrderRecord {
        order_id: order_id.to_string(),
        order_date: coerce_date(order_date, RejectedField::OrderDate)?,
        ship_date: coerce_date(ship_date, RejectedField::ShipDate)?,
        ship_mode: ship_mode.to_string(),
        customer_id: customer_id.to_string(),
        product_id: product_id.to_string(),
        sales: parse_numeric(sales).ok_or(RejectedField::Sales)?,
        quantity: quantity.to_string(),
        discount: discount.to_string(),
        profit: parse_numeric(profit).ok_or(RejectedField::Profit)?,
    })
}

fn coerce_date(value: &str, field: RejectedField) -> Result<NaiveDate, RejectedField> {
    parse_date(value).ok_or(field)
}

/// Keep the first occurrence of every value, preserving order.
pub fn distinct<T, I>(rows: I) -> Vec<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    distinct_by(rows, T::clone)
}

/// Keep the first row for every key, preserving order.
pub fn distinct_by<T, K, I, F>(rows: I, key: F) -> Vec<T>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    rows.into_iter().filter(|row| seen.insert(key(row))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(order_id: &str, order_date: &str, sales: &str, profit: &str) -> RawRecord {
        RawRecord {
            row_id: "1".to_string(),
            order_id: order_id.to_string(),
            order_date: order_date.to_string(),
            ship_date: "1/10/2016".to_string(),
            ship_mode: "Standard Class".to_string(),
            customer_id: "AB-100".to_string(),
            customer_name: "Ann Baker".to_string(),
            segment: "Consumer".to_string(),
            country: "United States".to_string(),
            city: "Austin".to_string(),
            state: "Texas".to_string(),
            postal_code: "78701".to_string(),
            region: "Central".to_string(),
            product_id: "OFF-PA-1".to_string(),
            category: "Office Supplies".to_string(),
            sub_category: "Paper".to_string(),
            product_name: "Copy Paper".to_string(),
            sales: sales.to_string(),
            quantity: "3".to_string(),
            discount: "0.2".to_string(),
            profit: profit.to_string(),
        }
    }

    #[test]
    fn test_distinct_preserves_first_occurrence() {
        assert_eq!(distinct(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(distinct(distinct(vec![3, 1, 3, 2, 1])), vec![3, 1, 2]);
    }

    #[test]
    fn test_orders_drop_unparseable_measures() {
        let records = vec![
            raw("A", "1/5/2016", "10.5", "2.0"),
            raw("B", "1/5/2016", "abc", "2.0"),
            raw("C", "1/5/2016", "10.5", ""),
            raw("D", "not a date", "10.5", "2.0"),
        ];
        let orders = build_orders(&records);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, "A");
        assert_eq!(orders[0].sales, 10.5);
    }

    #[test]
    fn test_orders_reject_ship_date() {
        let mut record = raw("A", "1/5/2016", "10.5", "2.0");
        record.ship_date = "someday".to_string();
        assert!(build_orders(&[record]).is_empty());
    }

    #[test]
    fn test_orders_ignore_row_id_when_deduplicating() {
        let mut second = raw("A", "1/5/2016", "10.5", "2.0");
        second.row_id = "2".to_string();
        let orders = build_orders(&[raw("A", "1/5/2016", "10.5", "2.0"), second]);
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn test_orders_dedup_after_coercion() {
        let orders = build_orders(&[
            raw("A", "1/5/2016", "10.5", "2.0"),
            raw("A", "01/05/2016", "10.50", "2"),
        ]);
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn test_coerce_order_reports_field() {
        let record = raw("A", "1/5/2016", "10.5", "x");
        assert_eq!(
            coerce_order(project_order(&record)),
            Err(RejectedField::Profit)
        );
        let record = raw("A", "bad", "bad", "bad");
        assert_eq!(
            coerce_order(project_order(&record)),
            Err(RejectedField::OrderDate)
        );
    }

    #[test]
    fn test_dimensions_come_from_all_rows() {
        // a row rejected from the fact table still contributes its product
        let mut bad = raw("B", "1/6/2016", "oops", "1.0");
        bad.product_id = "TEC-PH-9".to_string();
        let records = vec![raw("A", "1/5/2016", "10.5", "2.0"), bad];

        let products = build_products(&records);
        assert_eq!(products.len(), 2);
        assert_eq!(build_customers(&records).len(), 1);
    }

    #[test]
    fn test_conflicting_dimension_attributes_are_kept() {
        let mut renamed = raw("B", "1/6/2016", "1.0", "1.0");
        renamed.product_name = "Copy Paper, 500 sheets".to_string();
        let products = build_products(&[raw("A", "1/5/2016", "10.5", "2.0"), renamed]);
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.product_id == "OFF-PA-1"));
    }

    #[test]
    fn test_dates_first_appearance_order() {
        let records = vec![
            raw("A", "3/14/2015", "1", "1"),
            raw("B", "1/2/2015", "1", "1"),
            raw("C", "3/14/2015", "2", "1"),
        ];
        let dates = build_dates(&build_orders(&records));
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].date, NaiveDate::from_ymd_opt(2015, 3, 14).unwrap());
        assert_eq!(dates[0].month_name, "March");
        assert_eq!(dates[0].quarter, 1);
        assert_eq!(dates[1].date, NaiveDate::from_ymd_opt(2015, 1, 2).unwrap());
    }

    #[test]
    fn test_empty_input() {
        let schema = build_star_schema(&[]);
        assert!(schema.is_empty());
        assert!(schema.products.is_empty());
        assert!(schema.dates.is_empty());
    }
}
