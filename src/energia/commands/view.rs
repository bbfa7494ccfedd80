//! The table pipeline: store order → sort → filter.
//!
//! [`run`] is a pure function of the records and a [`ViewState`]. [`ViewCache`] sits in
//! front of it for sessions that re-render on every input; dropping the cache changes
//! nothing but the amount of work done.

use super::{filter, sort};
use crate::model::Record;
use crate::view_state::ViewState;
use log::debug;

/// The rows to display plus the size of the unfiltered set they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<Record>,
    pub total: usize,
}

impl TableView {
    pub fn shown(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn run(records: &[Record], state: &ViewState) -> TableView {
    let sorted = sort::run(records, &state.sort);
    let rows = filter::run(&sorted, &state.search_term);
    debug!(
        "table view: {} of {} records (search={:?}, sort={:?})",
        rows.len(),
        records.len(),
        state.search_term,
        state.sort
    );
    TableView {
        rows,
        total: records.len(),
    }
}

/// Remembers the last computed view and the state it was computed for.
#[derive(Debug, Default)]
pub struct ViewCache {
    last: Option<(ViewState, TableView)>,
    hits: usize,
    misses: usize,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, records: &[Record], state: &ViewState) -> TableView {
        if let Some((cached_state, view)) = &self.last {
            if cached_state == state && view.total == records.len() {
                self.hits += 1;
                debug!("view cache hit");
                return view.clone();
            }
        }

        self.misses += 1;
        let view = run(records, state);
        self.last = Some((state.clone(), view.clone()));
        view
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::view_state::{SortConfig, SortDirection, SortKey};

    #[test]
    fn default_state_shows_everything_in_store_order() {
        let records = StoreFixture::sample().records();
        let view = run(&records, &ViewState::new());
        assert_eq!(view.shown(), 10);
        assert_eq!(view.total, 10);
        assert_eq!(view.rows, records);
    }

    #[test]
    fn filters_after_sorting() {
        let records = StoreFixture::sample().records();
        let state = ViewState::new()
            .with_search(".9")
            .with_sort(SortConfig::by(SortKey::Factor, SortDirection::Descending));

        let view = run(&records, &state);
        let tags: Vec<&str> = view.rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["BA-07", "PE-10", "RJ-02", "PR-05"]);
        assert_eq!(view.total, 10);
    }

    #[test]
    fn empty_result_keeps_total() {
        let records = StoreFixture::sample().records();
        let view = run(&records, &ViewState::new().with_search("xyz"));
        assert!(view.is_empty());
        assert_eq!(view.total, 10);
    }

    #[test]
    fn filter_panel_values_do_not_change_rows() {
        let records = StoreFixture::sample().records();
        let mut panel = crate::view_state::FilterPanel {
            open: true,
            ..Default::default()
        };
        panel.min_factor = Some(0.9);
        let state = ViewState::new().with_filter_panel(panel);

        assert_eq!(run(&records, &state).shown(), 10);
    }

    #[test]
    fn cache_returns_same_view_for_same_state() {
        let records = StoreFixture::sample().records();
        let mut cache = ViewCache::new();
        let state = ViewState::new().with_search("sp");

        let first = cache.get_or_compute(&records, &state);
        let second = cache.get_or_compute(&records, &state);
        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);

        let third = cache.get_or_compute(&records, &state.clone().toggle_sort(SortKey::Tag));
        assert_eq!(cache.misses(), 2);
        assert_eq!(third, run(&records, &state.toggle_sort(SortKey::Tag)));
    }
}
