// src/config/rules.rs
//! Extraction rules as data.
//!
//! The month lexicon, both override sets, the candidate-table class and the
//! conjunction word live in `rules.toml` (bundled at compile time). A different
//! file can be supplied at startup with [`ExtractRules::load`]; the extractor
//! never hardcodes any of these values.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::data::DateKey;
use crate::error::{Error, Result};

const BUNDLED_RULES: &str = include_str!("rules.toml");

static BUILTIN: LazyLock<ExtractRules> = LazyLock::new(|| {
    ExtractRules::from_toml(BUNDLED_RULES).expect("bundled rules.toml is valid")
});

/// How a row's names cell is handled, decided by its date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPolicy {
    /// Names cell ignored, empty list recorded.
    ForceEmpty,
    /// Split names, then drop `(...)` annotations.
    StripAnnotations,
    /// Split names only.
    Plain,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    table_class: String,
    conjunction: String,
    #[serde(default)]
    force_empty: Vec<DateKey>,
    #[serde(default)]
    strip_annotations: Vec<DateKey>,
    months: BTreeMap<String, u32>,
}

#[derive(Clone, Debug)]
pub struct ExtractRules {
    table_class: String,
    conjunction: String,
    months: HashMap<String, u32>,
    force_empty: HashSet<DateKey>,
    strip_annotations: HashSet<DateKey>,
}

impl ExtractRules {
    /// Rules bundled with the binary.
    pub fn builtin() -> &'static ExtractRules {
        &BUILTIN
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Rules(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: RulesFile = toml::from_str(text).map_err(|e| Error::Rules(e.to_string()))?;

        let table_class = raw.table_class.trim().to_string();
        if table_class.is_empty() || table_class.contains(char::is_whitespace) {
            return Err(Error::Rules(format!("table_class must be a single class name, got {:?}", raw.table_class)));
        }
        let conjunction = raw.conjunction.trim().to_string();
        if conjunction.is_empty() {
            return Err(Error::Rules("conjunction must not be empty".into()));
        }

        let mut months = HashMap::with_capacity(raw.months.len());
        for (name, code) in raw.months {
            if !(1..=12).contains(&code) {
                return Err(Error::Rules(format!("month {name:?} maps to {code}, expected 1..=12")));
            }
            months.insert(name.trim().to_lowercase(), code);
        }

        Ok(Self {
            table_class,
            conjunction,
            months,
            force_empty: raw.force_empty.into_iter().collect(),
            strip_annotations: raw.strip_annotations.into_iter().collect(),
        })
    }

    pub fn table_class(&self) -> &str {
        &self.table_class
    }

    pub fn conjunction(&self) -> &str {
        &self.conjunction
    }

    /// Exact match on an already lowercased token.
    pub fn month(&self, token: &str) -> Option<u32> {
        self.months.get(token).copied()
    }

    /// Force-empty wins over annotation stripping.
    pub fn policy(&self, key: &DateKey) -> RowPolicy {
        if self.force_empty.contains(key) {
            RowPolicy::ForceEmpty
        } else if self.strip_annotations.contains(key) {
            RowPolicy::StripAnnotations
        } else {
            RowPolicy::Plain
        }
    }
}

impl Default for ExtractRules {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
