//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec owns exactly one page and
//! encodes *where the data lives in the HTML* and *how to read it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched document (no networking).
//! - **Selector choice** and row/cell interpretation for that page's layout.
//! - **Tolerant extraction**: rows that do not fit are skipped, never fatal.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), persistence (`store`), serving (`service`).
//! - Deciding whether an extraction result is good enough to keep; that is
//!   the runner's call (an empty table is rejected there).
//!
//! ## Typical call chain
//! ```text
//! CLI → service::refresh → runner::refresh → core::net (fetch)
//!                                          → specs::namedays::extract
//!                                          → store::TableStore::save
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline snippets and a saved fixture page
//! (`tests/fixtures/`).
pub mod namedays;
