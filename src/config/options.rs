// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub store: StoreOptions,
    /// Alternative rules file; `None` uses the bundled rules.
    pub rules_path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub api_url: String,
    pub page_title: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            api_url: API_URL.into(),
            page_title: PAGE_TITLE.into(),
            user_agent: USER_AGENT.into(),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub snapshot_path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
        }
    }
}
