//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone files in
//! `templates/` and embedded here with `include_str!`.
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks`, so a line holding only a
//! block tag produces no output. Lines that print something always end in `}}` or plain
//! text, never in a block tag.
//!
//! Width math and style selection stay in Rust: templates receive pre-padded cells and the
//! name of the style to use (`style(row.factor_style)`), not conditionals on data.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const NAV_TEMPLATE: &str = include_str!("templates/nav.tmp");
pub const HOME_TEMPLATE: &str = include_str!("templates/home.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const FEATURES_TEMPLATE: &str = include_str!("templates/features.tmp");
pub const BENEFITS_TEMPLATE: &str = include_str!("templates/benefits.tmp");
pub const CONTACT_TEMPLATE: &str = include_str!("templates/contact.tmp");
pub const FOOTER_TEMPLATE: &str = include_str!("templates/footer.tmp");

/// Every template, by the name the renderer registers it under.
pub const ALL: &[(&str, &str)] = &[
    ("table", TABLE_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("config", CONFIG_TEMPLATE),
    ("nav", NAV_TEMPLATE),
    ("home", HOME_TEMPLATE),
    ("stats", STATS_TEMPLATE),
    ("features", FEATURES_TEMPLATE),
    ("benefits", BENEFITS_TEMPLATE),
    ("contact", CONTACT_TEMPLATE),
    ("footer", FOOTER_TEMPLATE),
];
