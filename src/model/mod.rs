//! Back-margin record model and fixed filter option lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of back-margin data.
///
/// Records are immutable once fetched; the whole collection is replaced
/// on every fetch. Field names follow the `GET /back-margin` wire format
/// (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginRecord {
    pub id: i64,
    pub product: String,
    pub category: String,
    pub cost: f64,
    pub price: f64,
    pub margin: f64,
    pub margin_percentage: f64,
    pub date: NaiveDate,
    pub business_unit: String,
    pub department: String,
    pub vendor: String,
    /// Display label, e.g. "January 2024".
    pub month: String,
}

/// Business unit options for the filter bar. "All" clears the predicate.
pub const BUSINESS_UNITS: &[&str] = &["All", "Unit A", "Unit B", "Unit C", "Unit D"];

/// Department options for the filter bar.
pub const DEPARTMENTS: &[&str] = &["All", "Sales", "Marketing", "Operations", "Finance"];

/// Vendor options for the filter bar.
pub const VENDORS: &[&str] = &["All", "Vendor 1", "Vendor 2", "Vendor 3", "Vendor 4"];

/// Month options for the filter bar.
pub const MONTHS: &[&str] = &[
    "All",
    "January 2024",
    "February 2024",
    "March 2024",
    "April 2024",
    "May 2024",
    "June 2024",
    "July 2024",
    "August 2024",
    "September 2024",
    "October 2024",
    "November 2024",
    "December 2024",
];

fn record(
    id: i64,
    product: &str,
    category: &str,
    cost: f64,
    price: f64,
    margin: f64,
    margin_percentage: f64,
    date: (i32, u32, u32),
    business_unit: &str,
    department: &str,
    vendor: &str,
    month: &str,
) -> MarginRecord {
    MarginRecord {
        id,
        product: product.to_string(),
        category: category.to_string(),
        cost,
        price,
        margin,
        margin_percentage,
        // Sample dates are fixed literals and always valid.
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        business_unit: business_unit.to_string(),
        department: department.to_string(),
        vendor: vendor.to_string(),
        month: month.to_string(),
    }
}

/// Built-in sample records, used when the sample data switch is on.
pub fn sample_records() -> Vec<MarginRecord> {
    vec![
        record(
            1,
            "Product A",
            "Electronics",
            100.0,
            150.0,
            50.0,
            33.33,
            (2024, 1, 15),
            "Unit A",
            "Sales",
            "Vendor 1",
            "January 2024",
        ),
        record(
            2,
            "Product B",
            "Clothing",
            50.0,
            80.0,
            30.0,
            37.5,
            (2024, 1, 16),
            "Unit B",
            "Marketing",
            "Vendor 2",
            "January 2024",
        ),
        record(
            3,
            "Product C",
            "Food",
            20.0,
            35.0,
            15.0,
            42.86,
            (2024, 1, 17),
            "Unit A",
            "Operations",
            "Vendor 1",
            "February 2024",
        ),
        record(
            4,
            "Product D",
            "Electronics",
            200.0,
            280.0,
            80.0,
            28.57,
            (2024, 1, 18),
            "Unit C",
            "Finance",
            "Vendor 3",
            "February 2024",
        ),
        record(
            5,
            "Product E",
            "Clothing",
            75.0,
            120.0,
            45.0,
            37.5,
            (2024, 1, 19),
            "Unit B",
            "Sales",
            "Vendor 4",
            "March 2024",
        ),
    ]
}
