use std::collections::BTreeMap;

use super::model::{GroupField, Measure, Record};

/// Margin at or above which a group is coloured as healthy.
pub const HIGH_MARGIN_PCT: f64 = 20.0;
/// Margin at or above which a group is coloured as acceptable.
pub const MEDIUM_MARGIN_PCT: f64 = 10.0;
/// Length of the top-products ranking.
pub const DEFAULT_TOP_N: usize = 8;

/// `num / den`, or 0 when the denominator is zero.
fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

// ---------------------------------------------------------------------------
// Scalar KPIs
// ---------------------------------------------------------------------------

/// Headline figures for the KPI row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    pub total_sales: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    /// `profit / revenue × 100`, 0 for zero revenue.
    pub profit_margin: f64,
    pub record_count: usize,
    /// `sales / count`, 0 for an empty set.
    pub avg_order_value: f64,
}

pub fn kpis(records: &[&Record]) -> Kpis {
    let total_sales: f64 = records.iter().map(|r| r.sales).sum();
    let total_revenue: f64 = records.iter().map(|r| r.revenue).sum();
    let total_profit: f64 = records.iter().map(|r| r.profit).sum();
    let record_count = records.len();

    Kpis {
        total_sales,
        total_revenue,
        total_profit,
        profit_margin: ratio_or_zero(total_profit, total_revenue) * 100.0,
        record_count,
        avg_order_value: ratio_or_zero(total_sales, record_count as f64),
    }
}

// ---------------------------------------------------------------------------
// Grouped sums
// ---------------------------------------------------------------------------

/// One `{key, value}` pair of a grouped aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub value: f64,
}

/// Sum `measure` per distinct value of `field`, ordered by key.
pub fn grouped_sum(records: &[&Record], field: GroupField, measure: Measure) -> Vec<GroupTotal> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for rec in records {
        *groups.entry(field.key(rec)).or_default() += measure.value(rec);
    }
    groups
        .into_iter()
        .map(|(key, value)| GroupTotal {
            key: key.to_string(),
            value,
        })
        .collect()
}

/// Stable ascending sort by value (horizontal bar order).
pub fn sort_ascending(mut groups: Vec<GroupTotal>) -> Vec<GroupTotal> {
    groups.sort_by(|a, b| a.value.total_cmp(&b.value));
    groups
}

/// A group with its share of the grand total, for donut charts.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupShare {
    pub key: String,
    pub value: f64,
    /// Percentage of the total, 0 when the total is 0.
    pub pct: f64,
}

pub fn shares(groups: &[GroupTotal]) -> Vec<GroupShare> {
    let total: f64 = groups.iter().map(|g| g.value).sum();
    groups
        .iter()
        .map(|g| GroupShare {
            key: g.key.clone(),
            value: g.value,
            pct: ratio_or_zero(g.value, total) * 100.0,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// Sales and revenue for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    /// `YYYY-MM`
    pub month: String,
    pub sales: f64,
    pub revenue: f64,
}

/// Per-month sales and revenue, ascending by month key, one point per month.
pub fn monthly_series(records: &[&Record]) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for rec in records {
        let slot = months.entry(rec.month.as_str()).or_default();
        slot.0 += rec.sales;
        slot.1 += rec.revenue;
    }
    months
        .into_iter()
        .map(|(month, (sales, revenue))| MonthlyPoint {
            month: month.to_string(),
            sales,
            revenue,
        })
        .collect()
}

/// Sales for one (month, category) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMonthPoint {
    pub month: String,
    pub category: String,
    pub sales: f64,
}

/// Sales per (month, category), ascending by month then category.
pub fn monthly_sales_by_category(records: &[&Record]) -> Vec<CategoryMonthPoint> {
    let mut cells: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for rec in records {
        *cells.entry((rec.month.as_str(), rec.category)).or_default() += rec.sales;
    }
    cells
        .into_iter()
        .map(|((month, category), sales)| CategoryMonthPoint {
            month: month.to_string(),
            category: category.to_string(),
            sales,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Margin by sub-category
// ---------------------------------------------------------------------------

/// Colour band for a margin percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginBand {
    High,
    Medium,
    Low,
}

impl MarginBand {
    pub fn classify(margin_pct: f64) -> Self {
        if margin_pct >= HIGH_MARGIN_PCT {
            MarginBand::High
        } else if margin_pct >= MEDIUM_MARGIN_PCT {
            MarginBand::Medium
        } else {
            MarginBand::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMargin {
    pub key: String,
    pub sales: f64,
    pub profit: f64,
    /// `profit / sales × 100`, rounded to one decimal.
    pub margin_pct: f64,
    pub band: MarginBand,
}

/// Margin per group of `field`, highest margin first.
pub fn margin_by_group(records: &[&Record], field: GroupField) -> Vec<GroupMargin> {
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for rec in records {
        let slot = groups.entry(field.key(rec)).or_default();
        slot.0 += rec.sales;
        slot.1 += rec.profit;
    }
    let mut out: Vec<GroupMargin> = groups
        .into_iter()
        .map(|(key, (sales, profit))| {
            let margin_pct = (ratio_or_zero(profit, sales) * 1000.0).round() / 10.0;
            GroupMargin {
                key: key.to_string(),
                sales,
                profit,
                margin_pct,
                band: MarginBand::classify(margin_pct),
            }
        })
        .collect();
    out.sort_by(|a, b| b.margin_pct.total_cmp(&a.margin_pct));
    out
}

// ---------------------------------------------------------------------------
// Top-N ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// 1-based position.
    pub rank: usize,
    pub key: String,
    pub value: f64,
    /// Bar width relative to the largest entry in the ranking, 0..=100.
    pub bar_pct: u32,
}

/// The `n` largest groups of `field` by summed sales, descending.
pub fn top_n(records: &[&Record], field: GroupField, n: usize) -> Vec<RankedEntry> {
    let mut groups = grouped_sum(records, field, Measure::Sales);
    groups.sort_by(|a, b| b.value.total_cmp(&a.value));
    groups.truncate(n);

    let max = groups.first().map(|g| g.value).unwrap_or(0.0);
    groups
        .into_iter()
        .enumerate()
        .map(|(i, g)| RankedEntry {
            rank: i + 1,
            bar_pct: (ratio_or_zero(g.value, max) * 100.0).floor() as u32,
            key: g.key,
            value: g.value,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// Indices of the `limit` most recent records among `indices`.
pub fn latest_first(records: &[Record], indices: &[usize], limit: usize) -> Vec<usize> {
    let mut sorted = indices.to_vec();
    sorted.sort_by(|&a, &b| records[b].order_date.cmp(&records[a].order_date));
    sorted.truncate(limit);
    sorted
}
