// src/error.rs
//! Crate error type.
//!
//! Row-level noise on the scraped page is never an error; the extractor drops
//! such rows silently. Everything here is fatal to the operation that raised it.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport, HTTP status or API envelope failure while fetching the page.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// Extraction finished but produced no dates.
    #[error("extraction produced no name days")]
    EmptyExtraction,

    #[error("snapshot I/O error at {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot at {path} is not a valid name-day table: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid extraction rules: {0}")]
    Rules(String),

    #[error("invalid date: month {month}, day {day}")]
    InvalidDate { month: u32, day: u32 },

    #[error("month must be between 1 and 12 (got {0})")]
    InvalidMonth(u32),

    #[error("name '{0}' not found in nameday calendar")]
    NameNotFound(String),
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, resp) => {
                Error::FetchFailed(format!("HTTP {code} from {}", resp.get_url()))
            }
            ureq::Error::Transport(t) => Error::FetchFailed(t.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::NameNotFound("Kalle".into()).to_string(),
            "name 'Kalle' not found in nameday calendar"
        );
        assert_eq!(Error::InvalidMonth(13).to_string(), "month must be between 1 and 12 (got 13)");
        assert_eq!(Error::EmptyExtraction.to_string(), "extraction produced no name days");
    }
}
