// src/lib.rs
//! Swedish name days scraped from sv.wikipedia.
//!
//! The interesting part is [`specs::namedays::extract`], which turns the
//! rendered list page into a [`NamedayTable`]. Around it: a blocking page
//! fetcher ([`core::WikiClient`]), a JSON snapshot store ([`store::FileStore`])
//! and a lookup service that swaps in a fresh table on refresh
//! ([`service::NamedayService`]).

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod service;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use data::{DateKey, NamedayTable};
pub use error::{Error, Result};
pub use specs::namedays::extract;
