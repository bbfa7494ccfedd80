use crate::commands::{view, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::view_state::ViewState;
use log::warn;

pub fn run<S: DataStore>(store: &S, state: &ViewState) -> Result<CmdResult> {
    let records = store.list_records()?;
    let table = view::run(&records, state);

    let mut result = CmdResult::default().with_table(table, state.clone());
    if let Some(message) = inert_filter_notice(state) {
        result.add_message(message);
    }
    Ok(result)
}

/// The filter panel's date range and minimum factor are collected but never applied.
pub fn inert_filter_notice(state: &ViewState) -> Option<CmdMessage> {
    if !state.filter_panel.has_values() {
        return None;
    }
    warn!("filter panel values are not applied: {:?}", state.filter_panel);
    Some(CmdMessage::warning(
        "Date range and minimum factor filters are not applied to the results.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::view_state::FilterPanel;

    #[test]
    fn lists_matching_records_with_total() {
        let store = InMemoryStore::sample();
        let result = run(&store, &ViewState::new().with_search("rj")).unwrap();

        let table = result.table.unwrap();
        assert_eq!(table.shown(), 1);
        assert_eq!(table.total, 10);
        assert_eq!(table.rows[0].tag, "RJ-02");
        assert_eq!(result.state.unwrap().search_term, "rj");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn panel_values_produce_a_warning() {
        let store = InMemoryStore::sample();
        let state = ViewState::new().with_filter_panel(FilterPanel {
            open: true,
            min_factor: Some(0.9),
            ..Default::default()
        });

        let result = run(&store, &state).unwrap();
        assert_eq!(result.table.unwrap().shown(), 10);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn open_empty_panel_is_silent() {
        let store = InMemoryStore::sample();
        let state = ViewState::new().toggle_filter_panel();
        assert!(run(&store, &state).unwrap().messages.is_empty());
    }
}
