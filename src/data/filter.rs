use std::fmt;

use super::model::{FilterDimension, Record, SalesDataset};

/// Label of the wildcard entry in every filter selector.
pub const ALL_LABEL: &str = "All";

// ---------------------------------------------------------------------------
// Filter predicate: wildcard or one exact value per column
// ---------------------------------------------------------------------------

/// One equality predicate. `All` matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    /// `value` may be any type `T` compares against, so `Selection<String>`
    /// matches a borrowed `str` column directly.
    pub fn matches<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL_LABEL),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

/// The four sidebar selections. Default: everything `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub year: Selection<i32>,
    pub region: Selection<String>,
    pub category: Selection<String>,
    pub segment: Selection<String>,
}

impl FilterState {
    /// Whether a record passes every active predicate.
    pub fn matches(&self, record: &Record) -> bool {
        self.year.matches(&record.year)
            && self.region.matches(record.region)
            && self.category.matches(record.category)
            && self.segment.matches(record.segment)
    }

    /// Whether any predicate is narrower than `All`.
    pub fn is_active(&self) -> bool {
        !(self.year.is_all()
            && self.region.is_all()
            && self.category.is_all()
            && self.segment.is_all())
    }

    /// Return every predicate to `All`.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Current selector label for a column (`"All"` or the chosen value).
    pub fn selected_label(&self, dim: FilterDimension) -> String {
        match dim {
            FilterDimension::Year => self.year.to_string(),
            FilterDimension::Region => self.region.to_string(),
            FilterDimension::Category => self.category.to_string(),
            FilterDimension::Segment => self.segment.to_string(),
        }
    }

    /// Set a column from a selector label. `"All"` clears the predicate.
    ///
    /// A year label that is not a number is treated as `All`.
    pub fn set_from_label(&mut self, dim: FilterDimension, label: &str) {
        let text = || {
            if label == ALL_LABEL {
                Selection::All
            } else {
                Selection::Only(label.to_string())
            }
        };
        match dim {
            FilterDimension::Year => {
                self.year = match label.parse::<i32>() {
                    Ok(y) => Selection::Only(y),
                    Err(_) => {
                        if label != ALL_LABEL {
                            log::warn!("Ignoring non-numeric year filter '{label}'");
                        }
                        Selection::All
                    }
                };
            }
            FilterDimension::Region => self.region = text(),
            FilterDimension::Category => self.category = text(),
            FilterDimension::Segment => self.segment = text(),
        }
    }
}

// ---------------------------------------------------------------------------
// Selector options and filtering
// ---------------------------------------------------------------------------

/// `"All"` followed by the sorted distinct values of a column.
pub fn filter_options(dataset: &SalesDataset, dim: FilterDimension) -> Vec<String> {
    let mut options = vec![ALL_LABEL.to_string()];
    match dim {
        FilterDimension::Year => {
            options.extend(dataset.years.iter().map(|y| y.to_string()));
        }
        _ => {
            if let Some(vals) = dataset.unique_values.get(&dim) {
                options.extend(vals.iter().map(|v| v.to_string()));
            }
        }
    }
    options
}

/// Return indices of records that pass all active filters, in base order.
///
/// An empty result is valid; nothing downstream treats it as an error.
pub fn filtered_indices(dataset: &SalesDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filters.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::generate;

    #[test]
    fn default_state_keeps_everything() {
        let ds = generate(42, 300);
        let state = FilterState::default();
        assert!(!state.is_active());
        assert_eq!(filtered_indices(&ds, &state), (0..300).collect::<Vec<_>>());
    }

    #[test]
    fn predicates_are_anded() {
        let ds = generate(42, 1000);
        let mut state = FilterState::default();
        state.set_from_label(FilterDimension::Region, "West");
        state.set_from_label(FilterDimension::Year, "2023");
        assert!(state.is_active());

        let idx = filtered_indices(&ds, &state);
        assert!(!idx.is_empty());
        for i in idx {
            let r = &ds.records[i];
            assert_eq!(r.region, "West");
            assert_eq!(r.year, 2023);
        }
    }

    #[test]
    fn unknown_value_yields_empty_set() {
        let ds = generate(42, 100);
        let mut state = FilterState::default();
        state.set_from_label(FilterDimension::Category, "Groceries");
        assert!(filtered_indices(&ds, &state).is_empty());
    }

    #[test]
    fn labels_round_trip_through_selectors() {
        let mut state = FilterState::default();
        state.set_from_label(FilterDimension::Segment, "Home Office");
        assert_eq!(state.selected_label(FilterDimension::Segment), "Home Office");
        state.set_from_label(FilterDimension::Segment, ALL_LABEL);
        assert_eq!(state.segment, Selection::All);

        state.set_from_label(FilterDimension::Year, "not-a-year");
        assert_eq!(state.year, Selection::All);

        state.set_from_label(FilterDimension::Year, "2024");
        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn selection_matches_owned_and_borrowed_values() {
        let region: Selection<String> = Selection::Only("West".to_string());
        assert!(region.matches("West"));
        assert!(!region.matches("East"));
        assert!(Selection::<String>::All.matches("anything"));
        assert!(Selection::Only(2023).matches(&2023));
        assert!(!Selection::Only(2023).matches(&2024));
    }

    #[test]
    fn options_start_with_all_and_are_sorted() {
        let ds = generate(42, 1000);
        assert_eq!(
            filter_options(&ds, FilterDimension::Year),
            vec!["All", "2022", "2023", "2024"]
        );
        assert_eq!(
            filter_options(&ds, FilterDimension::Region),
            vec!["All", "Central", "East", "South", "West"]
        );
    }
}
