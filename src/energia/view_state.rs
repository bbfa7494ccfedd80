//! # View State
//!
//! Everything the user can change about the table lives in [`ViewState`]: the search term,
//! the sort configuration and the filter panel. It is an immutable snapshot; every
//! transition consumes the old value and returns a new one, so the pipeline in
//! `commands::view` is a plain function of `(records, state)`.
//!
//! Nothing here is ever persisted.

use crate::error::{EnergiaError, Result};
use crate::model::ISO_DATE;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortKey {
    PeriodStart,
    PeriodEnd,
    Tag,
    Factor,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::PeriodStart,
            SortKey::PeriodEnd,
            SortKey::Tag,
            SortKey::Factor,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::PeriodStart => "start",
            SortKey::PeriodEnd => "end",
            SortKey::Tag => "tag",
            SortKey::Factor => "factor",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = EnergiaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" | "period-start" | "inicio" => Ok(SortKey::PeriodStart),
            "end" | "period-end" | "fim" => Ok(SortKey::PeriodEnd),
            "tag" | "sigla" => Ok(SortKey::Tag),
            "factor" | "fator" => Ok(SortKey::Factor),
            other => Err(EnergiaError::InvalidInput(format!(
                "Unknown column '{}' (expected start, end, tag or factor)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active sort column and direction. `key == None` keeps the store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Selecting the active column while ascending flips it to descending.
    /// Any other selection sorts ascending on the chosen column.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self::by(key, direction)
    }
}

/// The filter panel inputs. They are shown to the user but not applied to the data.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterPanel {
    pub open: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub min_factor: Option<f64>,
}

impl FilterPanel {
    pub fn has_values(&self) -> bool {
        self.start.is_some() || self.end.is_some() || self.min_factor.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewState {
    pub search_term: String,
    pub sort: SortConfig,
    pub filter_panel: FilterPanel,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }

    pub fn toggle_sort(mut self, key: SortKey) -> Self {
        self.sort = self.sort.toggle(key);
        self
    }

    pub fn toggle_filter_panel(mut self) -> Self {
        self.filter_panel.open = !self.filter_panel.open;
        self
    }

    pub fn with_filter_panel(mut self, panel: FilterPanel) -> Self {
        self.filter_panel = panel;
        self
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE).map_err(|e| {
        EnergiaError::InvalidInput(format!("Invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
    })
}

pub fn parse_factor(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| EnergiaError::InvalidInput(format!("Invalid factor '{}': {}", s, e)))
}
