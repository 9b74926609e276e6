use super::aggregate::{
    self, CategoryMonthPoint, GroupMargin, GroupShare, GroupTotal, Kpis, MonthlyPoint,
    RankedEntry,
};
use super::model::{GroupField, Measure, SalesDataset};
use crate::format::format_count;

// ---------------------------------------------------------------------------
// DashboardSnapshot – every view's data for one filter state
// ---------------------------------------------------------------------------

/// All aggregations feeding the dashboard, recomputed in full whenever the
/// filters change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub kpis: Kpis,
    /// Revenue / sales per month.
    pub monthly: Vec<MonthlyPoint>,
    /// Sales per category, ascending by sales (horizontal bar order).
    pub category_sales: Vec<GroupTotal>,
    /// Sales per region with shares of the total.
    pub region_sales: Vec<GroupShare>,
    /// Sales per (month, category).
    pub category_trends: Vec<CategoryMonthPoint>,
    /// Best-selling products.
    pub top_products: Vec<RankedEntry>,
    /// Margin per sub-category, highest first.
    pub sub_category_margins: Vec<GroupMargin>,
    /// Revenue per customer segment with shares of the total.
    pub segment_revenue: Vec<GroupShare>,
    /// Most recent records for the raw-data table (indices into the base set).
    pub raw_indices: Vec<usize>,
    /// Configured row limit of the raw-data table.
    pub raw_limit: usize,
    /// Size of the filtered set the raw rows were taken from.
    pub filtered_count: usize,
}

impl DashboardSnapshot {
    /// Run every aggregation over the filtered `indices`.
    pub fn compute(
        dataset: &SalesDataset,
        indices: &[usize],
        top_n: usize,
        raw_rows: usize,
    ) -> Self {
        let records = dataset.select(indices);

        let category_sales = aggregate::sort_ascending(aggregate::grouped_sum(
            &records,
            GroupField::Category,
            Measure::Sales,
        ));
        let region_sales = aggregate::shares(&aggregate::grouped_sum(
            &records,
            GroupField::Region,
            Measure::Sales,
        ));
        let segment_revenue = aggregate::shares(&aggregate::grouped_sum(
            &records,
            GroupField::Segment,
            Measure::Revenue,
        ));

        DashboardSnapshot {
            kpis: aggregate::kpis(&records),
            monthly: aggregate::monthly_series(&records),
            category_sales,
            region_sales,
            category_trends: aggregate::monthly_sales_by_category(&records),
            top_products: aggregate::top_n(&records, GroupField::Product, top_n),
            sub_category_margins: aggregate::margin_by_group(&records, GroupField::SubCategory),
            segment_revenue,
            raw_indices: aggregate::latest_first(&dataset.records, indices, raw_rows),
            raw_limit: raw_rows,
            filtered_count: indices.len(),
        }
    }

    /// Caption under the raw-data table; states the configured limit even
    /// when fewer rows matched.
    pub fn raw_caption(&self) -> String {
        format!(
            "Showing top {} of {} filtered records",
            format_count(self.raw_limit),
            format_count(self.filtered_count)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::generate;

    #[test]
    fn full_set_snapshot_is_consistent() {
        let ds = generate(42, 1000);
        let idx: Vec<usize> = (0..ds.len()).collect();
        let snap = DashboardSnapshot::compute(&ds, &idx, 8, 200);

        assert_eq!(snap.kpis.record_count, 1000);
        assert_eq!(snap.top_products.len(), 8);
        assert_eq!(snap.raw_indices.len(), 200);
        assert_eq!(snap.raw_indices[0], 999);
        assert_eq!(snap.monthly.len(), 36);
        assert_eq!(snap.category_sales.len(), 3);
        assert!(snap.category_sales.windows(2).all(|w| w[0].value <= w[1].value));
        assert_eq!(snap.sub_category_margins.len(), 12);
        assert_eq!(snap.raw_caption(), "Showing top 200 of 1,000 filtered records");
    }

    #[test]
    fn empty_selection_gives_zeroed_snapshot() {
        let ds = generate(42, 100);
        let snap = DashboardSnapshot::compute(&ds, &[], 8, 200);
        assert_eq!(
            snap,
            DashboardSnapshot {
                raw_limit: 200,
                ..DashboardSnapshot::default()
            }
        );
    }

    #[test]
    fn caption_states_row_limit_for_small_selections() {
        let ds = generate(42, 1000);
        let idx: Vec<usize> = (0..29).collect();
        let snap = DashboardSnapshot::compute(&ds, &idx, 8, 200);
        assert_eq!(snap.raw_indices.len(), 29);
        assert_eq!(snap.raw_caption(), "Showing top 200 of 29 filtered records");
    }
}
