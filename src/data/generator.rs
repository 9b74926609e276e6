use std::sync::OnceLock;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{Record, SalesDataset, round_cents};

// ---------------------------------------------------------------------------
// Fixed enumerations (Superstore-style)
// ---------------------------------------------------------------------------

pub const CATEGORIES: [&str; 3] = ["Technology", "Furniture", "Office Supplies"];

pub const REGIONS: [&str; 4] = ["West", "East", "Central", "South"];

pub const SEGMENTS: [&str; 3] = ["Consumer", "Corporate", "Home Office"];

pub const PRODUCTS: [&str; 16] = [
    "Apple MacBook Pro",
    "Dell XPS 15",
    "Canon ImageClass",
    "Logitech MX Master",
    "Herman Miller Chair",
    "IKEA Kallax Shelf",
    "Fellowes Shredder",
    "Avery Binders",
    "Samsung Galaxy Tab",
    "Sony WH-1000XM5",
    "HP LaserJet Pro",
    "Staples Paper Ream",
    "Microsoft Surface",
    "Cisco IP Phone",
    "Bush Bookcase",
    "3M Post-it Notes",
];

pub const DISCOUNTS: [f64; 5] = [0.0, 0.1, 0.2, 0.3, 0.4];

/// Sub-categories of `CATEGORIES[i]`, row `i`.
pub const SUB_CATEGORIES: [[&str; 4]; 3] = [
    ["Phones", "Laptops", "Accessories", "Printers"],
    ["Chairs", "Tables", "Bookcases", "Storage"],
    ["Paper", "Binders", "Art", "Fasteners"],
];

/// Sub-categories belonging to a category, `None` for an unknown category.
pub fn sub_categories(category: &str) -> Option<&'static [&'static str; 4]> {
    CATEGORIES
        .iter()
        .position(|c| *c == category)
        .map(|i| &SUB_CATEGORIES[i])
}

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_RECORD_COUNT: usize = 1000;

const SALES_RANGE: std::ops::Range<f64> = 50.0..3000.0;
const QUANTITY_RANGE: std::ops::Range<u32> = 1..10;
const PROFIT_RATE_RANGE: std::ops::Range<f64> = 0.1..0.4;

/// First and last order timestamps (inclusive).
pub fn date_window() -> (NaiveDateTime, NaiveDateTime) {
    let day = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    };
    (day(2022, 1, 1), day(2024, 12, 31))
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// `n` timestamps spread evenly across the window, both endpoints included.
pub fn evenly_spaced_dates(n: usize) -> Vec<NaiveDateTime> {
    let (start, end) = date_window();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let span_ns = (end - start).num_nanoseconds().unwrap_or(0) as i128;
    let steps = (n - 1) as i128;
    (0..n)
        .map(|i| {
            let offset = span_ns * i as i128 / steps;
            start + Duration::nanoseconds(offset as i64)
        })
        .collect()
}

/// Uniform draw from a fixed, non-empty table.
fn pick<T: Copy, const N: usize>(rng: &mut StdRng, items: &[T; N]) -> T {
    items[pick_index(rng, items)]
}

fn pick_index<T, const N: usize>(rng: &mut StdRng, _items: &[T; N]) -> usize {
    const { assert!(N > 0, "cannot draw from an empty table") };
    rng.gen_range(0..N)
}

/// Deterministically generate `n` records from `seed`.
///
/// Columns are drawn one after another (all categories, then all
/// sub-categories, …) so adding a column at the end never perturbs the
/// earlier ones.
pub fn generate(seed: u64, n: usize) -> SalesDataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let dates = evenly_spaced_dates(n);
    let category_idx: Vec<usize> = (0..n).map(|_| pick_index(&mut rng, &CATEGORIES)).collect();
    let sub_cats: Vec<&'static str> = category_idx
        .iter()
        .map(|&c| pick(&mut rng, &SUB_CATEGORIES[c]))
        .collect();
    let regions: Vec<&'static str> = (0..n).map(|_| pick(&mut rng, &REGIONS)).collect();
    let segments: Vec<&'static str> = (0..n).map(|_| pick(&mut rng, &SEGMENTS)).collect();
    let products: Vec<&'static str> = (0..n).map(|_| pick(&mut rng, &PRODUCTS)).collect();
    let sales: Vec<f64> = (0..n)
        .map(|_| round_cents(rng.gen_range(SALES_RANGE)))
        .collect();
    let quantities: Vec<u32> = (0..n).map(|_| rng.gen_range(QUANTITY_RANGE)).collect();
    let discounts: Vec<f64> = (0..n).map(|_| pick(&mut rng, &DISCOUNTS)).collect();
    let profit_rates: Vec<f64> = (0..n).map(|_| rng.gen_range(PROFIT_RATE_RANGE)).collect();

    let records = (0..n)
        .map(|i| {
            Record::new(
                dates[i],
                CATEGORIES[category_idx[i]],
                sub_cats[i],
                regions[i],
                segments[i],
                products[i],
                sales[i],
                quantities[i],
                discounts[i],
                round_cents(sales[i] * profit_rates[i]),
            )
        })
        .collect();

    SalesDataset::from_records(records)
}

// ---------------------------------------------------------------------------
// Process-wide cache
// ---------------------------------------------------------------------------

static DATASET: OnceLock<SalesDataset> = OnceLock::new();

/// The process-wide dataset, generated on first access.
///
/// Only the first caller's `seed` and `n` are used; later calls return the
/// already generated set.
pub fn cached(seed: u64, n: usize) -> &'static SalesDataset {
    DATASET.get_or_init(|| {
        let ds = generate(seed, n);
        log::info!("Generated {} records (seed {seed})", ds.len());
        ds
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_records() {
        let a = generate(42, 200);
        let b = generate(42, 200);
        assert_eq!(a.records, b.records);
    }

    #[test]
    fn different_seed_changes_draws() {
        let a = generate(42, 200);
        let b = generate(7, 200);
        assert_ne!(a.records, b.records);
    }

    #[test]
    fn dates_cover_window_inclusive() {
        let dates = evenly_spaced_dates(1000);
        let (start, end) = date_window();
        assert_eq!(dates.len(), 1000);
        assert_eq!(dates[0], start);
        assert_eq!(dates[999], end);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(evenly_spaced_dates(1), vec![start]);
        assert!(evenly_spaced_dates(0).is_empty());
    }

    #[test]
    fn fields_respect_ranges_and_enumerations() {
        let ds = generate(42, 1000);
        for r in &ds.records {
            assert!(CATEGORIES.contains(&r.category));
            let subs = sub_categories(r.category).unwrap();
            assert!(subs.contains(&r.sub_category));
            assert!(REGIONS.contains(&r.region));
            assert!(SEGMENTS.contains(&r.segment));
            assert!(PRODUCTS.contains(&r.product));
            assert!((50.0..=3000.0).contains(&r.sales));
            assert!((1..=9).contains(&r.quantity));
            assert!(DISCOUNTS.contains(&r.discount));
            assert!(r.profit > 0.0 && r.profit < r.sales);
            assert_eq!(r.revenue, round_cents(r.sales * r.quantity as f64));
            assert!((2022..=2024).contains(&r.year));
        }
        assert_eq!(ds.years.len(), 3);
    }

    #[test]
    fn sub_category_lookup_is_total_over_categories() {
        for cat in CATEGORIES {
            let subs = sub_categories(cat).unwrap();
            assert!(subs.iter().all(|s| !s.is_empty()));
        }
        assert_eq!(sub_categories("Groceries"), None);
    }

    #[test]
    fn cached_dataset_is_generated_once() {
        let first = cached(DEFAULT_SEED, DEFAULT_RECORD_COUNT);
        let second = cached(1, 10);
        assert!(std::ptr::eq(first, second));
    }
}
