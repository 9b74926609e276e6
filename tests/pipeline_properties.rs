//! End-to-end checks of the filter → aggregate pipeline on the generated
//! dataset (seed 42, 1000 records).

use sales_dashboard::data::aggregate::{
    grouped_sum, kpis, margin_by_group, monthly_series, top_n, MarginBand,
};
use sales_dashboard::data::filter::{filter_options, filtered_indices, FilterState};
use sales_dashboard::data::generator::generate;
use sales_dashboard::data::model::{FilterDimension, GroupField, Measure, Record, SalesDataset};
use sales_dashboard::data::snapshot::DashboardSnapshot;

fn base() -> SalesDataset {
    generate(42, 1000)
}

/// Every combination of the four selectors, including wildcards.
fn all_filter_states(ds: &SalesDataset) -> Vec<FilterState> {
    let opts = |d| filter_options(ds, d);
    let mut out = Vec::new();
    for y in opts(FilterDimension::Year) {
        for r in opts(FilterDimension::Region) {
            for c in opts(FilterDimension::Category) {
                for s in opts(FilterDimension::Segment) {
                    let mut f = FilterState::default();
                    f.set_from_label(FilterDimension::Year, &y);
                    f.set_from_label(FilterDimension::Region, &r);
                    f.set_from_label(FilterDimension::Category, &c);
                    f.set_from_label(FilterDimension::Segment, &s);
                    out.push(f);
                }
            }
        }
    }
    out
}

/// Year × Region selections, other columns left at `All`.
fn year_region_states(ds: &SalesDataset) -> Vec<FilterState> {
    let mut out = Vec::new();
    for y in filter_options(ds, FilterDimension::Year) {
        for r in filter_options(ds, FilterDimension::Region) {
            let mut f = FilterState::default();
            f.set_from_label(FilterDimension::Year, &y);
            f.set_from_label(FilterDimension::Region, &r);
            out.push(f);
        }
    }
    out
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn filtered_set_is_subset_satisfying_every_predicate() {
    let ds = base();
    let states = all_filter_states(&ds);
    assert_eq!(states.len(), 4 * 5 * 4 * 4);

    for f in &states {
        let idx = filtered_indices(&ds, f);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
        assert!(idx.iter().all(|&i| i < ds.len()));
        for &i in &idx {
            assert!(f.matches(&ds.records[i]));
        }
        let expected = ds.records.iter().filter(|r| f.matches(r)).count();
        assert_eq!(idx.len(), expected);
    }
}

#[test]
fn west_technology_count_is_reproducible() {
    let count = || {
        let ds = base();
        let mut f = FilterState::default();
        f.set_from_label(FilterDimension::Region, "West");
        f.set_from_label(FilterDimension::Category, "Technology");
        filtered_indices(&ds, &f).len()
    };
    let first = count();
    assert!(first > 0);
    assert_eq!(first, count());
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

#[test]
fn group_sums_partition_total_sales() {
    let ds = base();
    for f in all_filter_states(&ds).iter().step_by(7) {
        let recs = ds.select(&filtered_indices(&ds, f));
        let total = kpis(&recs).total_sales;
        for field in [
            GroupField::Category,
            GroupField::SubCategory,
            GroupField::Region,
            GroupField::Segment,
            GroupField::Product,
        ] {
            let sum: f64 = grouped_sum(&recs, field, Measure::Sales).iter().map(|g| g.value).sum();
            assert!(close(sum, total), "{field:?}: {sum} vs {total}");
        }
        let monthly: f64 = monthly_series(&recs).iter().map(|p| p.sales).sum();
        assert!(close(monthly, total));
    }
}

#[test]
fn profit_margin_stays_in_range() {
    let ds = base();
    for f in all_filter_states(&ds) {
        let recs = ds.select(&filtered_indices(&ds, &f));
        let k = kpis(&recs);
        assert!((0.0..=100.0).contains(&k.profit_margin));
        if recs.is_empty() {
            assert_eq!(k.profit_margin, 0.0);
        }
    }
}

#[test]
fn top_products_are_bounded_descending_and_scaled() {
    let ds = base();
    for f in all_filter_states(&ds).iter().step_by(5) {
        let recs = ds.select(&filtered_indices(&ds, f));
        let top = top_n(&recs, GroupField::Product, 8);
        assert!(top.len() <= 8);
        assert!(top.windows(2).all(|w| w[0].value >= w[1].value));
        assert!(top.iter().enumerate().all(|(i, e)| e.rank == i + 1));
        assert!(top.windows(2).all(|w| w[0].bar_pct >= w[1].bar_pct));
        if let Some(first) = top.first() {
            assert_eq!(first.bar_pct, 100);
            assert_eq!(first.rank, 1);
        }
    }
}

#[test]
fn top_products_strictly_descend_per_year_and_region() {
    let ds = base();
    let states = year_region_states(&ds);
    assert_eq!(states.len(), 4 * 5);
    for f in &states {
        let recs = ds.select(&filtered_indices(&ds, f));
        let top = top_n(&recs, GroupField::Product, 8);
        assert_eq!(top.len(), 8, "{f:?}");
        assert!(
            top.windows(2).all(|w| w[0].value > w[1].value),
            "tied ranking under {f:?}"
        );
    }
}

#[test]
fn monthly_series_is_sorted_without_duplicates() {
    let ds = base();
    let all: Vec<&Record> = ds.records.iter().collect();
    let series = monthly_series(&all);
    assert_eq!(series.len(), 36);
    assert!(series.windows(2).all(|w| w[0].month < w[1].month));
    assert_eq!(series.first().map(|p| p.month.as_str()), Some("2022-01"));
    assert_eq!(series.last().map(|p| p.month.as_str()), Some("2024-12"));
}

#[test]
fn sub_category_margins_are_banded_by_threshold() {
    let ds = base();
    let all: Vec<&Record> = ds.records.iter().collect();
    let margins = margin_by_group(&all, GroupField::SubCategory);
    assert_eq!(margins.len(), 12);
    assert!(margins.windows(2).all(|w| w[0].margin_pct >= w[1].margin_pct));
    for m in &margins {
        let expected = if m.margin_pct >= 20.0 {
            MarginBand::High
        } else if m.margin_pct >= 10.0 {
            MarginBand::Medium
        } else {
            MarginBand::Low
        };
        assert_eq!(m.band, expected);
    }
}

// ---------------------------------------------------------------------------
// Empty selections
// ---------------------------------------------------------------------------

#[test]
fn zero_match_filters_report_zeroes() {
    let ds = base();
    let mut f = FilterState::default();
    f.set_from_label(FilterDimension::Category, "Groceries");
    let idx = filtered_indices(&ds, &f);
    assert!(idx.is_empty());

    let snap = DashboardSnapshot::compute(&ds, &idx, 8, 200);
    assert_eq!(snap.kpis.total_sales, 0.0);
    assert_eq!(snap.kpis.profit_margin, 0.0);
    assert_eq!(snap.kpis.avg_order_value, 0.0);
    assert!(snap.top_products.is_empty());
    assert!(snap.monthly.is_empty());
    assert!(snap.raw_indices.is_empty());
    assert_eq!(snap.raw_caption(), "Showing top 200 of 0 filtered records");
}
