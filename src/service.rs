// src/service.rs
//! Owns the served table and answers lookups.
//!
//! The active table sits behind an `RwLock<Arc<_>>`: readers clone the `Arc`
//! and work on a consistent snapshot; a refresh swaps the pointer only after
//! the new table has been extracted and saved. Refreshes are serialized by a
//! separate mutex so two triggers never interleave their writes.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tracing::info;

use crate::{
    config::{consts::VALIDATION_YEAR, AppOptions, ExtractRules},
    core::{DocumentSource, WikiClient},
    data::{DateKey, NamedayTable},
    error::{Error, Result},
    progress::Progress,
    runner,
    store::{FileStore, TableStore},
};

/* ---------------- response shapes ---------------- */

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateView {
    pub date: String,
    pub names: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameMatch {
    pub date: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameView {
    pub name: String,
    pub dates: Vec<NameMatch>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: u32,
    pub namedays: NamedayTable,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllView {
    pub namedays: NamedayTable,
    pub total_dates: usize,
    pub total_names: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub status: &'static str,
    pub total_dates: usize,
    pub total_names: usize,
}

/* ---------------- service ---------------- */

pub struct NamedayService {
    table: RwLock<Arc<NamedayTable>>,
    refresh_lock: Mutex<()>,
    source: Box<dyn DocumentSource + Send + Sync>,
    store: Box<dyn TableStore>,
    rules: ExtractRules,
    page: String,
}

impl NamedayService {
    /// Starts serving whatever the store currently holds.
    pub fn open(
        source: Box<dyn DocumentSource + Send + Sync>,
        store: Box<dyn TableStore>,
        rules: ExtractRules,
        page: impl Into<String>,
    ) -> Result<Self> {
        let initial = store.load()?;
        Ok(Self {
            table: RwLock::new(Arc::new(initial)),
            refresh_lock: Mutex::new(()),
            source,
            store,
            rules,
            page: page.into(),
        })
    }

    /// Wikipedia client + JSON snapshot file, as configured.
    pub fn from_options(opts: &AppOptions) -> Result<Self> {
        let rules = match &opts.rules_path {
            Some(p) => ExtractRules::load(p)?,
            None => ExtractRules::default(),
        };
        Self::open(
            Box::new(WikiClient::new(&opts.fetch)),
            Box::new(FileStore::new(&opts.store.snapshot_path)),
            rules,
            opts.fetch.page_title.clone(),
        )
    }

    /// Current table; stays valid even if a refresh swaps it afterwards.
    pub fn table(&self) -> Arc<NamedayTable> {
        Arc::clone(&self.table.read())
    }

    pub fn today(&self) -> DateView {
        self.on(Local::now().date_naive())
    }

    pub fn on(&self, date: NaiveDate) -> DateView {
        match DateKey::new(date.month(), date.day()) {
            Some(key) => self.view(&key),
            None => DateView { date: date.format("%m-%d").to_string(), names: Vec::new(), count: 0 },
        }
    }

    /// Month 1–12, day 1–31 and a real date in a leap year.
    pub fn by_date(&self, month: u32, day: u32) -> Result<DateView> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        let key = NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day)
            .and_then(|_| DateKey::new(month, day))
            .ok_or(Error::InvalidDate { month, day })?;
        Ok(self.view(&key))
    }

    /// Case-insensitive exact match; at most one hit per date.
    pub fn by_name(&self, name: &str) -> Result<NameView> {
        let wanted = name.to_lowercase();
        let table = self.table();

        let dates: Vec<NameMatch> = table
            .iter()
            .filter_map(|(key, names)| {
                names
                    .iter()
                    .find(|n| n.to_lowercase() == wanted)
                    .map(|n| NameMatch { date: key.to_string(), name: n.clone() })
            })
            .collect();

        if dates.is_empty() {
            return Err(Error::NameNotFound(name.to_string()));
        }
        Ok(NameView { name: name.to_string(), count: dates.len(), dates })
    }

    pub fn by_month(&self, month: u32) -> Result<MonthView> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        let namedays: NamedayTable = self
            .table()
            .month(month)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(MonthView { month, count: namedays.len(), namedays })
    }

    pub fn all(&self) -> AllView {
        let table = self.table();
        AllView {
            total_dates: table.len(),
            total_names: table.total_names(),
            namedays: (*table).clone(),
        }
    }

    /// Rerun the scrape. On any error the served table is left as it was.
    pub fn refresh(&self, progress: Option<&mut dyn Progress>) -> Result<RefreshSummary> {
        let _guard = self.refresh_lock.lock();

        let fresh = runner::refresh(
            self.source.as_ref(),
            &self.page,
            &self.rules,
            self.store.as_ref(),
            progress,
        )?;

        let summary = RefreshSummary {
            status: "success",
            total_dates: fresh.len(),
            total_names: fresh.total_names(),
        };
        *self.table.write() = Arc::new(fresh);
        info!(dates = summary.total_dates, names = summary.total_names, "served table replaced");
        Ok(summary)
    }

    fn view(&self, key: &DateKey) -> DateView {
        let names = self.table().get(key).map(<[String]>::to_vec).unwrap_or_default();
        DateView { date: key.to_string(), count: names.len(), names }
    }
}
