use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::export;
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::generator::CATEGORIES;
use crate::data::model::{FilterDimension, SalesDataset};
use crate::data::snapshot::DashboardSnapshot;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Base dataset, generated once for the process.
    pub dataset: &'static SalesDataset,

    pub config: DashboardConfig,

    /// Sidebar selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Every aggregation for the current filters (cached).
    pub snapshot: DashboardSnapshot,

    /// Stable colour per category across charts.
    pub category_colors: ColorMap,

    /// Optional footer picture.
    pub avatar: Option<Arc<[u8]>>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial, unfiltered state.
    pub fn new(
        dataset: &'static SalesDataset,
        config: DashboardConfig,
        avatar: Option<Arc<[u8]>>,
    ) -> Self {
        let mut state = Self {
            dataset,
            config,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            snapshot: DashboardSnapshot::default(),
            category_colors: ColorMap::new(CATEGORIES),
            avatar,
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` and every aggregation after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(self.dataset, &self.filters);
        self.snapshot = DashboardSnapshot::compute(
            self.dataset,
            &self.visible_indices,
            self.config.top_n,
            self.config.raw_rows,
        );
        log::debug!(
            "Filters {:?} → {} of {} records",
            self.filters,
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    /// Change one selector. Returns whether anything changed.
    pub fn set_filter(&mut self, dim: FilterDimension, label: &str) -> bool {
        let before = self.filters.clone();
        self.filters.set_from_label(dim, label);
        let changed = before != self.filters;
        if changed {
            self.refilter();
        }
        changed
    }

    /// Clear every selector.
    pub fn reset_filters(&mut self) {
        if self.filters.is_active() {
            self.filters.reset();
            self.refilter();
        }
    }

    /// Write the currently filtered records to `path`.
    pub fn export_filtered(&self, path: &Path) -> Result<usize> {
        let records = self.dataset.select(&self.visible_indices);
        export::write_file(path, &records)
            .with_context(|| format!("exporting to {}", path.display()))?;
        Ok(records.len())
    }
}
