//! End-to-end tests for the star schema export
//!
//! Loads a small hand-built export from disk, derives the tables and checks
//! the written files row by row.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use data_facade::{
    build_star_schema, load_records, sales_by_date, write_star_schema, CsvDirectorySink,
    DataError, ExportConfigBuilder,
};

const FIXTURE: &str = "\
Row ID,Order ID,Order Date,Ship Date,Ship Mode,Customer ID,Customer Name,Segment,Country,City,State,Postal Code,Region,Product ID,Category,Sub-Category,Product Name,Sales,Quantity,Discount,Profit
1,O-1,1/3/2016,1/7/2016,Standard Class,AB-10015,Aaron Bergman,Consumer,United States,Seattle,Washington,98103,West,OFF-PA-10001,Office Supplies,Paper,Easy-staple paper,10.0,2,0,3.5
2,O-1,1/3/2016,1/7/2016,Standard Class,AB-10015,Aaron Bergman,Consumer,United States,Seattle,Washington,98103,West,FUR-CH-10002,Furniture,Chairs,\"Task Chair, Mesh\",200.0,1,0.2,-20.0
3,O-2,1/4/2016,1/6/2016,Second Class,CG-12520,Claire Gute,Corporate,United States,Henderson,Kentucky,42420,South,TEC-PH-10003,Technology,Phones,Desk Phone,50.0,1,0,12.0
4,O-3,1/4/2016,1/8/2016,Standard Class,AB-10015,Aaron Bergman,Consumer,United States,Seattle,Washington,98103,West,OFF-PA-10001,Office Supplies,Paper,Easy-staple paper,15.0,3,0,4.5
5,O-4,2/1/2016,2/3/2016,First Class,CG-12520,Claire Gute,Corporate,United States,Henderson,Kentucky,42420,South,FUR-CH-10002,Furniture,Chairs,\"Task Chair, Mesh\",100.0,1,0,25.0
6,O-5,2/1/2016,2/4/2016,First Class,CG-12520,Claire Gute,Corporate,United States,Henderson,Kentucky,42420,South,OFF-PA-10001,Office Supplies,Paper,Easy-staple paper,5.0,1,0,1.5
7,O-6,3/15/2016,3/20/2016,Standard Class,AB-10015,Aaron Bergman,Consumer,United States,Seattle,Washington,98103,West,TEC-PH-10003,Technology,Phones,Desk Phone,80.0,2,0.1,8.0
8,O-7,3/15/2016,3/19/2016,Standard Class,CG-12520,Claire Gute,Corporate,United States,Henderson,Kentucky,42420,South,FUR-CH-10002,Furniture,Chairs,\"Task Chair, Mesh\",120.0,1,0,30.0
9,O-8,4/1/2016,4/5/2016,Same Day,AB-10015,Aaron Bergman,Consumer,United States,Seattle,Washington,98103,West,OFF-PA-10001,Office Supplies,Paper,Easy-staple paper,7.5,1,0,2.25
10,O-9,4/1/2016,4/1/2016,Same Day,CG-12520,Claire Gute,Corporate,United States,Henderson,Kentucky,42420,South,TEC-PH-10003,Technology,Phones,Desk Phone,60.0,2,0,15.0
11,O-9,4/1/2016,4/1/2016,Same Day,CG-12520,Claire Gute,Corporate,United States,Henderson,Kentucky,42420,South,TEC-PH-10003,Technology,Phones,Desk Phone,60.0,2,0,15.0
12,O-10,4/2/2016,4/6/2016,Same Day,AB-10015,Aaron Bergman,Consumer,United States,Seattle,Washington,98103,West,OFF-PA-10001,Office Supplies,Paper,Easy-staple paper,N/A,1,0,2.0
";

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("Sample - Superstore.csv");
    fs::write(&path, FIXTURE).unwrap();
    path
}

#[test]
fn test_fixture_schema_tables() {
    let dir = tempfile::tempdir().unwrap();
    let records = load_records(write_fixture(dir.path())).unwrap();
    assert_eq!(records.len(), 12);

    let schema = build_star_schema(&records);

    let order_ids: Vec<&str> = schema.orders.iter().map(|o| o.order_id.as_str()).collect();
    assert_eq!(
        order_ids,
        vec!["O-1", "O-1", "O-2", "O-3", "O-4", "O-5", "O-6", "O-7", "O-8", "O-9"]
    );
    let total_sales: f64 = schema.orders.iter().map(|o| o.sales).sum();
    let total_profit: f64 = schema.orders.iter().map(|o| o.profit).sum();
    assert!((total_sales - 647.5).abs() < 1e-9);
    assert!((total_profit - 81.75).abs() < 1e-9);

    let product_ids: Vec<&str> = schema.products.iter().map(|p| p.product_id.as_str()).collect();
    assert_eq!(product_ids, vec!["OFF-PA-10001", "FUR-CH-10002", "TEC-PH-10003"]);
    assert_eq!(schema.products[1].product_name, "Task Chair, Mesh");

    let customer_ids: Vec<&str> = schema
        .customers
        .iter()
        .map(|c| c.customer_id.as_str())
        .collect();
    assert_eq!(customer_ids, vec!["AB-10015", "CG-12520"]);
    assert_eq!(schema.customers[1].postal_code, "42420");

    let dates: Vec<NaiveDate> = schema.dates.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        vec![
            ymd(2016, 1, 3),
            ymd(2016, 1, 4),
            ymd(2016, 2, 1),
            ymd(2016, 3, 15),
            ymd(2016, 4, 1)
        ]
    );
    assert_eq!(schema.dates[3].month_name, "March");
    assert_eq!(schema.dates[4].quarter, 2);
}

#[test]
fn test_fixture_referential_completeness() {
    let dir = tempfile::tempdir().unwrap();
    let schema = build_star_schema(&load_records(write_fixture(dir.path())).unwrap());

    let products: HashSet<&str> = schema.products.iter().map(|p| p.product_id.as_str()).collect();
    let customers: HashSet<&str> = schema
        .customers
        .iter()
        .map(|c| c.customer_id.as_str())
        .collect();
    for order in &schema.orders {
        assert!(products.contains(order.product_id.as_str()));
        assert!(customers.contains(order.customer_id.as_str()));
    }

    let order_dates: HashSet<NaiveDate> = schema.orders.iter().map(|o| o.order_date).collect();
    assert_eq!(order_dates.len(), schema.dates.len());
    for date in &schema.dates {
        assert!(order_dates.contains(&date.date));
    }
}

#[test]
fn test_fixture_daily_sales() {
    let dir = tempfile::tempdir().unwrap();
    let schema = build_star_schema(&load_records(write_fixture(dir.path())).unwrap());

    let series = sales_by_date(&schema.orders);
    assert_eq!(
        series,
        vec![
            (ymd(2016, 1, 3), 210.0),
            (ymd(2016, 1, 4), 65.0),
            (ymd(2016, 2, 1), 105.0),
            (ymd(2016, 3, 15), 200.0),
            (ymd(2016, 4, 1), 67.5),
        ]
    );
}

#[test]
fn test_fixture_written_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path());
    let config = ExportConfigBuilder::new()
        .input(input)
        .output_dir(dir.path().join("out"))
        .build();

    let schema = build_star_schema(&load_records(&config.input).unwrap());
    let mut sink = CsvDirectorySink::new(&config.output_dir);
    let paths = write_star_schema(&schema, &config.files, &mut sink).unwrap();
    assert_eq!(paths.len(), 4);

    let orders = fs::read_to_string(config.output_path(&config.files.orders)).unwrap();
    let mut lines = orders.lines();
    assert_eq!(
        lines.next(),
        Some(
            "Order ID,Order Date,Ship Date,Ship Mode,Customer ID,Product ID,\
             Sales,Quantity,Discount,Profit"
        )
    );
    assert_eq!(
        lines.next(),
        Some("O-1,2016-01-03,2016-01-07,Standard Class,AB-10015,OFF-PA-10001,10.0,2,0,3.5")
    );
    assert_eq!(orders.lines().count(), 11);

    let products = fs::read_to_string(config.output_path(&config.files.products)).unwrap();
    assert_eq!(
        products,
        "Product ID,Category,Sub-Category,Product Name\n\
OFF-PA-10001,Office Supplies,Paper,Easy-staple paper\n\
FUR-CH-10002,Furniture,Chairs,\"Task Chair, Mesh\"\n\
TEC-PH-10003,Technology,Phones,Desk Phone\n"
    );

    let customers = fs::read_to_string(config.output_path(&config.files.customers)).unwrap();
    assert_eq!(
        customers,
        "Customer ID,Customer Name,Segment,Country,City,State,Postal Code,Region\n\
AB-10015,Aaron Bergman,Consumer,United States,Seattle,Washington,98103,West\n\
CG-12520,Claire Gute,Corporate,United States,Henderson,Kentucky,42420,South\n"
    );

    let dates = fs::read_to_string(config.output_path(&config.files.dates)).unwrap();
    assert_eq!(
        dates,
        "Date,Year,MonthNumber,MonthName,Quarter\n\
2016-01-03,2016,1,January,1\n\
2016-01-04,2016,1,January,1\n\
2016-02-01,2016,2,February,1\n\
2016-03-15,2016,3,March,1\n\
2016-04-01,2016,4,April,2\n"
    );
}

#[test]
fn test_missing_input_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    match load_records(&missing) {
        Err(DataError::FileNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
