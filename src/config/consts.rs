// src/config/consts.rs

// Net config
pub const API_URL: &str = "https://sv.wikipedia.org/w/api.php";
pub const PAGE_TITLE: &str = "Lista_över_namnsdagar_i_Sverige_i_datumordning";
pub const USER_AGENT: &str = "swedish-nameday-api/1.0 (https://example.com)";
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Local snapshot
pub const DEFAULT_SNAPSHOT_FILE: &str = "svenska_namnsdagar.json";

// Leap year used to validate month/day pairs in lookups
pub const VALIDATION_YEAR: i32 = 2000;
