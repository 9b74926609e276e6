use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one synthetic transaction
// ---------------------------------------------------------------------------

/// One row of the transactions table.
///
/// Categorical fields point into the generator's fixed enumerations, so a
/// record is cheap to clone and never owns its labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Order Date")]
    pub order_date: NaiveDateTime,
    #[serde(rename = "Category")]
    pub category: &'static str,
    #[serde(rename = "Sub-Category")]
    pub sub_category: &'static str,
    #[serde(rename = "Region")]
    pub region: &'static str,
    #[serde(rename = "Segment")]
    pub segment: &'static str,
    #[serde(rename = "Product")]
    pub product: &'static str,
    /// Unit sales amount.
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    /// Discount fraction, one of 0.0 / 0.1 / 0.2 / 0.3 / 0.4.
    #[serde(rename = "Discount")]
    pub discount: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    /// `sales × quantity`, rounded to cents.
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "Year")]
    pub year: i32,
    /// Calendar month key, `YYYY-MM`.
    #[serde(rename = "Month")]
    pub month: String,
    /// Display month, `Mon YYYY`.
    #[serde(rename = "MonthName")]
    pub month_name: String,
}

impl Record {
    /// Build a record, deriving revenue and the calendar period fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_date: NaiveDateTime,
        category: &'static str,
        sub_category: &'static str,
        region: &'static str,
        segment: &'static str,
        product: &'static str,
        sales: f64,
        quantity: u32,
        discount: f64,
        profit: f64,
    ) -> Self {
        Record {
            order_date,
            category,
            sub_category,
            region,
            segment,
            product,
            sales,
            quantity,
            discount,
            profit,
            revenue: round_cents(sales * quantity as f64),
            year: order_date.year(),
            month: order_date.format("%Y-%m").to_string(),
            month_name: order_date.format("%b %Y").to_string(),
        }
    }

    /// Order date as shown in the raw-data table (`05 Mar 2023`).
    pub fn display_date(&self) -> String {
        self.order_date.format("%d %b %Y").to_string()
    }
}

/// Round to two decimals (cents).
pub fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Field selectors
// ---------------------------------------------------------------------------

/// The four columns exposed as sidebar filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterDimension {
    Year,
    Region,
    Category,
    Segment,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 4] = [
        FilterDimension::Year,
        FilterDimension::Region,
        FilterDimension::Category,
        FilterDimension::Segment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterDimension::Year => "Year",
            FilterDimension::Region => "Region",
            FilterDimension::Category => "Category",
            FilterDimension::Segment => "Segment",
        }
    }
}

/// Categorical columns a grouped aggregation can key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Category,
    SubCategory,
    Region,
    Segment,
    Product,
}

impl GroupField {
    pub fn key(self, record: &Record) -> &'static str {
        match self {
            GroupField::Category => record.category,
            GroupField::SubCategory => record.sub_category,
            GroupField::Region => record.region,
            GroupField::Segment => record.segment,
            GroupField::Product => record.product,
        }
    }
}

/// Numeric columns a grouped aggregation can sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Sales,
    Revenue,
    Profit,
    Quantity,
}

impl Measure {
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Measure::Sales => record.sales,
            Measure::Revenue => record.revenue,
            Measure::Profit => record.profit,
            Measure::Quantity => record.quantity as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete generated table
// ---------------------------------------------------------------------------

/// The full record set with pre-computed filter option indices.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// All records, in generation (date ascending) order.
    pub records: Vec<Record>,
    /// Distinct calendar years, ascending.
    pub years: BTreeSet<i32>,
    /// For each text filter column the sorted set of distinct values.
    pub unique_values: BTreeMap<FilterDimension, BTreeSet<&'static str>>,
}

impl SalesDataset {
    /// Build filter indices from the generated records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years = BTreeSet::new();
        let mut unique_values: BTreeMap<FilterDimension, BTreeSet<&'static str>> =
            BTreeMap::new();

        for rec in &records {
            years.insert(rec.year);
            for (dim, val) in [
                (FilterDimension::Region, rec.region),
                (FilterDimension::Category, rec.category),
                (FilterDimension::Segment, rec.segment),
            ] {
                unique_values.entry(dim).or_default().insert(val);
            }
        }

        SalesDataset {
            records,
            years,
            unique_values,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a list of indices into record references, keeping their order.
    pub fn select(&self, indices: &[usize]) -> Vec<&Record> {
        indices.iter().map(|&i| &self.records[i]).collect()
    }
}
