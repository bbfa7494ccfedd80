//! Styles for the energia CLI.
//!
//! Templates never carry ANSI codes. They name a semantic style through the `style`
//! filter (`{{ row.tag | style("tag") }}`) and this module maps those names to
//! `console::Style` values. Changing the look of the output means changing this table,
//! not the templates.
//!
//! A style name that is not registered renders with a `(!?)` prefix so typos show up in
//! the output instead of passing silently.
//!
//! When colors are off (piped output, `--no-color`, `TERM=dumb`) the filter returns the
//! text untouched, still flagging unknown names.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TITLE: &str = "title";
    pub const BRAND: &str = "brand";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const LABEL: &str = "label";
    pub const CONTROL: &str = "control";
    pub const HEADER: &str = "header";
    pub const HEADER_ACTIVE: &str = "header_active";
    pub const DATE: &str = "date";
    pub const DATE_STRIPED: &str = "date_striped";
    pub const TAG: &str = "tag";
    pub const FACTOR_HIGH: &str = "factor_high";
    pub const FACTOR_MEDIUM: &str = "factor_medium";
    pub const FACTOR_LOW: &str = "factor_low";
    pub const ACCENT: &str = "accent";
    pub const CHECK: &str = "check";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

/// Named console styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

pub static ENERGIA_THEME: Lazy<Theme> = Lazy::new(|| {
    use names::*;

    Theme::new()
        .add(TITLE, Style::new().bold())
        .add(BRAND, Style::new().bold().green())
        .add(MUTED, Style::new().color256(250))
        .add(FAINT, Style::new().color256(244))
        .add(LABEL, Style::new().bold())
        .add(CONTROL, Style::new().cyan())
        .add(HEADER, Style::new().bold().color256(250))
        .add(HEADER_ACTIVE, Style::new().bold())
        .add(DATE, Style::new().color256(250))
        .add(DATE_STRIPED, Style::new().color256(250).on_color256(236))
        .add(TAG, Style::new().magenta())
        .add(FACTOR_HIGH, Style::new().green())
        .add(FACTOR_MEDIUM, Style::new().yellow())
        .add(FACTOR_LOW, Style::new().red())
        .add(ACCENT, Style::new().green().bold())
        .add(CHECK, Style::new().green())
        .add(INFO, Style::new().dim())
        .add(SUCCESS, Style::new().green())
        .add(WARNING, Style::new().yellow())
});
