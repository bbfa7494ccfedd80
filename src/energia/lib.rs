//! # Energia Architecture
//!
//! Energia presents EnergiaTech's energy-efficiency records as a sortable, searchable
//! table, and the company's landing page. It is a **UI-agnostic library** with a terminal
//! client; the library never assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, handles terminal I/O│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, session.rs)                  │
//! │  - Sort, filter and view pipeline, landing, config          │
//! │  - Pure functions over Rust values                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore seeded with sample data   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Table Pipeline
//!
//! ```text
//! records (store order) ──sort(ViewState.sort)──▶ filter(ViewState.search_term) ──▶ TableView
//! ```
//!
//! The pipeline is a pure function of `(records, ViewState)`; see `commands::view`.
//! Memoization (`ViewCache`) is an optimization only.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Sort, filter, view pipeline, landing and config logic
//! - [`session`]: Line-oriented interactive table session
//! - [`store`]: Record source abstraction and the in-memory store
//! - [`model`]: `Record` and `FactorTier`
//! - [`view_state`]: Immutable view state snapshots
//! - [`landing`]: Landing page content and section visibility tracking
//! - [`config`]: Display configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod landing;
pub mod model;
pub mod session;
pub mod store;
pub mod view_state;
