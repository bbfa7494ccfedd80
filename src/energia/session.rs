//! # Interactive Session
//!
//! A session owns the records, the current [`ViewState`] and a [`ViewCache`]. Each line of
//! user input is parsed into an [`Input`], applied to produce the next state snapshot,
//! and the table is recomputed (or served from the cache when the state is unchanged).
//!
//! Input grammar, one command per line:
//!
//! ```text
//! /<text>            search for <text>
//! search <text>      same; `search` alone clears the term
//! clear              clear the search term
//! sort <column>      toggle sorting on start | end | tag | factor
//! filters            show or hide the filter panel
//! start <date>       fill the panel's start date (YYYY-MM-DD)
//! end <date>         fill the panel's end date
//! min <factor>       fill the panel's minimum factor
//! help               list commands
//! quit               leave
//! ```
//!
//! Malformed input never ends the session; it becomes a warning message and the table is
//! shown unchanged.

use crate::commands::list::inert_filter_notice;
use crate::commands::view::ViewCache;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EnergiaError, Result};
use crate::model::Record;
use crate::store::DataStore;
use crate::view_state::{parse_date, parse_factor, SortKey, ViewState};
use chrono::NaiveDate;

pub const SESSION_HELP: &str = "\
/<text> | search <text>   search tag, dates and factor
clear                     clear the search
sort <column>             sort by start, end, tag or factor (again to reverse)
filters                   show or hide the filter panel
start|end <YYYY-MM-DD>    fill the panel dates
min <factor>              fill the panel minimum factor
help                      show this list
quit                      leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Search(String),
    Clear,
    Sort(SortKey),
    ToggleFilters,
    Start(NaiveDate),
    End(NaiveDate),
    MinFactor(f64),
    Help,
    Quit,
    Noop,
}

impl Input {
    pub fn parse(line: &str) -> Result<Input> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Input::Noop);
        }
        if let Some(term) = line.strip_prefix('/') {
            return Ok(Input::Search(term.to_string()));
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match (command.to_lowercase().as_str(), arg) {
            ("search" | "s", term) => Ok(Input::Search(term.to_string())),
            ("clear", "") => Ok(Input::Clear),
            ("sort", column) if !column.is_empty() => Ok(Input::Sort(column.parse()?)),
            ("filters" | "f", "") => Ok(Input::ToggleFilters),
            ("start", date) if !date.is_empty() => Ok(Input::Start(parse_date(date)?)),
            ("end", date) if !date.is_empty() => Ok(Input::End(parse_date(date)?)),
            ("min", factor) if !factor.is_empty() => Ok(Input::MinFactor(parse_factor(factor)?)),
            ("help" | "?", "") => Ok(Input::Help),
            ("quit" | "q" | "exit", "") => Ok(Input::Quit),
            _ => Err(EnergiaError::InvalidInput(format!(
                "Unrecognized input '{}' (type help for commands)",
                line
            ))),
        }
    }

    /// The state after this input. Inputs that do not touch the view return it unchanged.
    pub fn apply(&self, state: ViewState) -> ViewState {
        match self {
            Input::Search(term) => state.with_search(term.clone()),
            Input::Clear => state.with_search(""),
            Input::Sort(key) => state.toggle_sort(*key),
            Input::ToggleFilters => state.toggle_filter_panel(),
            Input::Start(date) => {
                let mut panel = state.filter_panel.clone();
                panel.start = Some(*date);
                state.with_filter_panel(panel)
            }
            Input::End(date) => {
                let mut panel = state.filter_panel.clone();
                panel.end = Some(*date);
                state.with_filter_panel(panel)
            }
            Input::MinFactor(factor) => {
                let mut panel = state.filter_panel.clone();
                panel.min_factor = Some(*factor);
                state.with_filter_panel(panel)
            }
            Input::Help | Input::Quit | Input::Noop => state,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct Session {
    records: Vec<Record>,
    state: ViewState,
    cache: ViewCache,
}

impl Session {
    pub fn new<S: DataStore>(store: &S, state: ViewState) -> Result<Self> {
        Ok(Self {
            records: store.list_records()?,
            state,
            cache: ViewCache::new(),
        })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn cache(&self) -> &ViewCache {
        &self.cache
    }

    /// The table for the current state.
    pub fn current(&mut self) -> CmdResult {
        let table = self.cache.get_or_compute(&self.records, &self.state);
        CmdResult::default().with_table(table, self.state.clone())
    }

    /// Handles one line of input and returns what to show next.
    pub fn step(&mut self, line: &str) -> (Outcome, CmdResult) {
        let input = match Input::parse(line) {
            Ok(input) => input,
            Err(e) => {
                let mut result = self.current();
                result.add_message(CmdMessage::warning(e.to_string()));
                return (Outcome::Continue, result);
            }
        };

        match input {
            Input::Quit => (Outcome::Quit, CmdResult::default()),
            Input::Help => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::info(SESSION_HELP));
                (Outcome::Continue, result)
            }
            input => {
                let touches_panel = matches!(
                    input,
                    Input::Start(_) | Input::End(_) | Input::MinFactor(_)
                );
                self.state = input.apply(std::mem::take(&mut self.state));
                let mut result = self.current();
                if touches_panel {
                    if let Some(notice) = inert_filter_notice(&self.state) {
                        result.add_message(notice);
                    }
                }
                (Outcome::Continue, result)
            }
        }
    }
}
