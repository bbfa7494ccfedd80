//! # CLI Behavior
//!
//! This is **one possible UI client** for energia, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`energia`)
//!
//! Running `energia` with no arguments renders the table with the default view state,
//! same as `energia table`.
//!
//! ## Flags Become View State
//!
//! `table` and `browse` accept the same flags. They are folded into a `ViewState` before
//! the API is called: `--sort factor --desc` is the `factor` column toggled twice, and any
//! filter panel value opens the panel.
//!
//! ## Browse
//!
//! `energia browse` reads one command per line from stdin (see `energia::session`). It
//! works with a terminal or a pipe: `printf '/rj\nquit\n' | energia browse`.
//!
//! ## Landing
//!
//! `energia landing --scroll 20 --height 15` prints only the lines in that window and a
//! status line listing the anchored sections seen in it.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Template rendering and layout
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling
//! - `templates`: Embedded output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
