// src/runner.rs
use tracing::warn;

use crate::{
    config::ExtractRules,
    core::DocumentSource,
    data::NamedayTable,
    error::{Error, Result},
    progress::Progress,
    specs,
    store::TableStore,
};

/// Fetch → extract → save. The stored table is only replaced when the
/// extraction produced at least one date.
pub fn refresh(
    source: &dyn DocumentSource,
    page: &str,
    rules: &ExtractRules,
    store: &dyn TableStore,
    mut progress: Option<&mut dyn Progress>,
) -> Result<NamedayTable> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching Wikipedia data…");
    }
    let html = source.fetch_document(page)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Parsing name days…");
    }
    let table = specs::namedays::extract_with(&html, rules);
    if table.is_empty() {
        warn!(page, bytes = html.len(), "no name days found, keeping previous snapshot");
        return Err(Error::EmptyExtraction);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Writing snapshot ({} days)", table.len()));
    }
    store.save(&table)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish("Done ✔");
    }
    Ok(table)
}
