// src/specs/namedays.rs
//! Scraping *spec* for the Swedish name-day list.
//!
//! Page: `Lista_över_namnsdagar_i_Sverige_i_datumordning` (sv.wikipedia).
//!
//! Layout the parser relies on:
//! - one `table.wikitable` per month (any other table is ignored),
//! - first row of each table is a header,
//! - cell 0 is `"<day> <month>"` in Swedish (`"1 januari"`), cell 1 lists the names
//!   separated by commas and/or `" och "`, extra cells are ignored.
//!
//! Rows that do not fit (footnotes, colspan notes, anything without a readable
//! date) are dropped silently. A handful of dates need special treatment; those
//! are listed in `config/rules.toml`, not here.
//!
//! Pure: markup in, [`NamedayTable`] out. No I/O, no errors.

use std::fmt;

use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::ExtractRules;
use crate::config::rules::RowPolicy;
use crate::core::html::{class_selector, element_text, selector};
use crate::core::sanitize::{split_names, split_names_stripped};
use crate::data::{DateKey, NamedayTable};

/// Why a row contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    TooFewCells(usize),
    DateShape(String),
    UnknownMonth(String),
    BadDay(String),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::TooFewCells(n) => write!(f, "{n} cell(s), need 2"),
            Skip::DateShape(s) => write!(f, "date cell {s:?} is not '<day> <month>'"),
            Skip::UnknownMonth(m) => write!(f, "unknown month {m:?}"),
            Skip::BadDay(d) => write!(f, "day {d:?} is not 1..=31"),
        }
    }
}

/// Extract with the bundled rules.
pub fn extract(markup: &str) -> NamedayTable {
    extract_with(markup, ExtractRules::builtin())
}

pub fn extract_with(markup: &str, rules: &ExtractRules) -> NamedayTable {
    let mut out = NamedayTable::new();

    let Some(tables) = class_selector("table", rules.table_class()) else {
        warn!(class = rules.table_class(), "table class is not a usable selector");
        return out;
    };
    let tr = selector("tr");
    let cell = selector("td, th");

    let doc = Html::parse_document(markup);
    let (mut n_tables, mut kept, mut skipped) = (0usize, 0usize, 0usize);

    for table in doc.select(&tables) {
        n_tables += 1;
        // first row is the header
        for row in table.select(&tr).skip(1) {
            let cells: Vec<String> = row.select(&cell).map(element_text).collect();
            match parse_row(&cells, rules) {
                Ok((key, names)) => {
                    out.insert(key, names);
                    kept += 1;
                }
                Err(reason) => {
                    debug!(%reason, "skipping row");
                    skipped += 1;
                }
            }
        }
    }

    info!(tables = n_tables, rows = kept, skipped, dates = out.len(), "extracted name days");
    out
}

/// One row's cell texts -> (key, names).
pub fn parse_row(cells: &[String], rules: &ExtractRules) -> Result<(DateKey, Vec<String>), Skip> {
    let [date_cell, names_cell, ..] = cells else {
        return Err(Skip::TooFewCells(cells.len()));
    };

    let key = parse_date(date_cell, rules)?;

    let names = match rules.policy(&key) {
        RowPolicy::ForceEmpty => Vec::new(),
        RowPolicy::StripAnnotations => split_names_stripped(names_cell, rules.conjunction()),
        RowPolicy::Plain => split_names(names_cell, rules.conjunction()),
    };
    Ok((key, names))
}

/// `"1 januari"`, `"01 Januari"` -> `01-01`.
pub fn parse_date(cell: &str, rules: &ExtractRules) -> Result<DateKey, Skip> {
    let lower = cell.to_lowercase();
    let mut parts = lower.split_whitespace();
    let (Some(day), Some(month), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Skip::DateShape(cell.to_string()));
    };

    let month_code = rules
        .month(month)
        .ok_or_else(|| Skip::UnknownMonth(month.to_string()))?;
    let day_num: u32 = day.parse().map_err(|_| Skip::BadDay(day.to_string()))?;

    DateKey::new(month_code, day_num).ok_or_else(|| Skip::BadDay(day.to_string()))
}
