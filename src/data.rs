// src/data.rs
//
// Canonical data shapes shared by the extractor, the snapshot store and the
// lookup service.
//
// - DateKey:      "MM-DD", year independent. 02-29 is a normal key.
// - NamedayTable: DateKey -> names in page order. This is also the exact
//                 JSON shape written to disk.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normalized `MM-DD` identifier of a recurring calendar day.
///
/// Only month 1..=12 and day 1..=31 are checked; `02-31` is a valid key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// `None` when month or day is out of range.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self(format!("{month:02}-{day:02}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn month(&self) -> u32 {
        // shape is guaranteed by the constructors
        self.0[..2].parse().unwrap_or_default()
    }

    pub fn day(&self) -> u32 {
        self.0[3..].parse().unwrap_or_default()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date key {0:?} (expected MM-DD)")]
pub struct ParseDateKeyError(String);

impl FromStr for DateKey {
    type Err = ParseDateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDateKeyError(s.to_string());
        let (m, d) = s.split_once('-').ok_or_else(err)?;
        if m.len() != 2 || d.len() != 2 {
            return Err(err());
        }
        let month: u32 = m.parse().map_err(|_| err())?;
        let day: u32 = d.parse().map_err(|_| err())?;
        DateKey::new(month, day).ok_or_else(err)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The full date -> names mapping. Keys iterate in calendar order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedayTable(BTreeMap<DateKey, Vec<String>>);

impl NamedayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins.
    pub fn insert(&mut self, key: DateKey, names: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(key, names)
    }

    pub fn get(&self, key: &DateKey) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all name-list lengths.
    pub fn total_names(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &Vec<String>)> {
        self.0.iter()
    }

    /// Entries whose key starts with the given month.
    pub fn month(&self, month: u32) -> impl Iterator<Item = (&DateKey, &Vec<String>)> {
        self.0.iter().filter(move |(k, _)| k.month() == month)
    }
}

impl FromIterator<(DateKey, Vec<String>)> for NamedayTable {
    fn from_iter<I: IntoIterator<Item = (DateKey, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_zero_pads() {
        assert_eq!(DateKey::new(3, 5).unwrap().as_str(), "03-05");
        assert_eq!(DateKey::new(12, 31).unwrap().as_str(), "12-31");
    }

    #[test]
    fn date_key_allows_any_day_up_to_31() {
        assert!(DateKey::new(2, 29).is_some());
        assert!(DateKey::new(2, 31).is_some());
        assert!(DateKey::new(0, 1).is_none());
        assert!(DateKey::new(13, 1).is_none());
        assert!(DateKey::new(1, 0).is_none());
        assert!(DateKey::new(1, 32).is_none());
    }

    #[test]
    fn date_key_parses_only_canonical_shape() {
        let k: DateKey = "04-30".parse().unwrap();
        assert_eq!((k.month(), k.day()), (4, 30));
        assert!("4-30".parse::<DateKey>().is_err());
        assert!("04/30".parse::<DateKey>().is_err());
        assert!("13-01".parse::<DateKey>().is_err());
    }

    #[test]
    fn table_serializes_as_plain_object() {
        let mut t = NamedayTable::new();
        t.insert(DateKey::new(1, 2).unwrap(), vec!["Svea".into()]);
        t.insert(DateKey::new(1, 1).unwrap(), vec![]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"01-01":[],"01-02":["Svea"]}"#);
        assert_eq!(t.total_names(), 1);
    }

    #[test]
    fn table_rejects_malformed_keys_on_load() {
        let bad = r#"{"1-1": ["X"]}"#;
        assert!(serde_json::from_str::<NamedayTable>(bad).is_err());
    }
}
