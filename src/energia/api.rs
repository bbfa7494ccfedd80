//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every energia operation, whatever UI drives it.
//!
//! It dispatches to `commands/*`, and returns structured `Result<CmdResult>` values. It
//! does not hold business logic, never writes to stdout/stderr, and never formats
//! output.
//!
//! `EnergiaApi<S: DataStore>` is generic over the record source. The binary and the
//! tests both use `InMemoryStore`, but tests build stores holding only the records a
//! case needs.

use crate::commands::config::ConfigAction;
use crate::commands::landing::LandingOptions;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use crate::view_state::ViewState;
use std::path::PathBuf;

pub use crate::commands::{CmdMessage, MessageLevel, TableView};

pub struct EnergiaApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> EnergiaApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    /// Sorted, filtered table for a view state.
    pub fn table(&self, state: &ViewState) -> Result<CmdResult> {
        commands::list::run(&self.store, state)
    }

    /// Starts an interactive session from `state`.
    pub fn session(&self, state: ViewState) -> Result<Session> {
        Session::new(&self.store, state)
    }

    pub fn landing(&self, options: &LandingOptions) -> Result<CmdResult> {
        commands::landing::run(options)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::view_state::SortKey;

    fn api_with(store: InMemoryStore) -> (EnergiaApi<InMemoryStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (EnergiaApi::new(store, dir.path().to_path_buf()), dir)
    }

    #[test]
    fn table_dispatches_to_list() {
        let fixture = StoreFixture::new()
            .with_record("SP-01", 0.85)
            .with_record("RJ-02", 0.92)
            .with_record("MG-03", 0.78);
        let (api, _dir) = api_with(fixture.store);

        let result = api
            .table(&ViewState::new().toggle_sort(SortKey::Factor))
            .unwrap();
        let factors: Vec<f64> = result.table.unwrap().rows.iter().map(|r| r.factor).collect();
        assert_eq!(factors, vec![0.78, 0.85, 0.92]);
    }

    #[test]
    fn landing_returns_view() {
        let (api, _dir) = api_with(InMemoryStore::new());
        let result = api.landing(&LandingOptions::default()).unwrap();
        assert!(result.landing.is_some());
        assert!(result.table.is_none());
    }

    #[test]
    fn config_uses_api_directory() {
        let (api, dir) = api_with(InMemoryStore::new());
        api.config(ConfigAction::Set("zebra".into(), "no".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }

    #[test]
    fn session_starts_from_given_state() {
        let (api, _dir) = api_with(InMemoryStore::sample());
        let mut session = api.session(ViewState::new().with_search("ce")).unwrap();
        let result = session.current();
        assert_eq!(result.table.unwrap().rows[0].tag, "CE-08");
    }
}
