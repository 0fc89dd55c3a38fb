// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use serde::Serialize;

use crate::config::consts::{API_URL, DEFAULT_SNAPSHOT_FILE, FETCH_TIMEOUT_SECS, PAGE_TITLE};
use crate::config::{AppOptions, ExtractRules, FetchOptions, StoreOptions};
use crate::error::Error;
use crate::progress::Progress;
use crate::service::NamedayService;
use crate::specs::namedays;
use crate::store::{FileStore, TableStore};

#[derive(Debug, Parser)]
#[command(name = "namnsdag", version, about = "Swedish name days (namnsdagar) from sv.wikipedia")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON snapshot to serve from and refresh into
    #[arg(long, global = true, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub snapshot: PathBuf,

    /// Extraction rules (TOML); defaults to the bundled rules
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    #[arg(long, global = true, default_value = API_URL)]
    pub api_url: String,

    /// Wiki page title to scrape
    #[arg(long, global = true, default_value = PAGE_TITLE)]
    pub page: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the wiki page and replace the snapshot
    Refresh,
    /// Parse a saved HTML page offline and print (or write) the table
    Extract {
        input: PathBuf,
        /// Write the table here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Name days for today
    Today,
    /// Name days for a date
    Date { month: u32, day: u32 },
    /// Dates for a name
    Name { name: String },
    /// All name days in a month
    Month { month: u32 },
    /// The whole table
    All,
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        AppOptions {
            fetch: FetchOptions {
                api_url: self.api_url.clone(),
                page_title: self.page.clone(),
                timeout: Duration::from_secs(self.timeout),
                ..FetchOptions::default()
            },
            store: StoreOptions { snapshot_path: self.snapshot.clone() },
            rules_path: self.rules.clone(),
        }
    }
}

/// Progress lines go to stderr; stdout is reserved for JSON.
struct StderrProgress;
impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn finish(&mut self, summary: &str) { eprintln!("{summary}"); }
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let opts = cli.options();
    let open = || {
        NamedayService::from_options(&opts)
            .wrap_err_with(|| format!("opening snapshot {}", opts.store.snapshot_path.display()))
    };

    match cli.command {
        Command::Refresh => print_json(&open()?.refresh(Some(&mut StderrProgress))?),
        Command::Extract { input, out } => extract_offline(&opts, &input, out.as_deref()),
        Command::Today => print_json(&open()?.today()),
        Command::Date { month, day } => print_json(&open()?.by_date(month, day)?),
        Command::Name { name } => print_json(&open()?.by_name(&name)?),
        Command::Month { month } => print_json(&open()?.by_month(month)?),
        Command::All => print_json(&open()?.all()),
    }
}

fn extract_offline(opts: &AppOptions, input: &Path, out: Option<&Path>) -> color_eyre::Result<()> {
    let rules = match &opts.rules_path {
        Some(p) => ExtractRules::load(p)?,
        None => ExtractRules::default(),
    };
    let html = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("reading {}", input.display()))?;

    let table = namedays::extract_with(&html, &rules);
    if table.is_empty() {
        return Err(Error::EmptyExtraction.into());
    }

    match out {
        Some(path) => {
            FileStore::new(path).save(&table)?;
            eprintln!("Wrote {} ({} days)", path.display(), table.len());
            Ok(())
        }
        None => print_json(&table),
    }
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
