// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod rules;

pub use options::{AppOptions, FetchOptions, StoreOptions};
pub use rules::ExtractRules;
