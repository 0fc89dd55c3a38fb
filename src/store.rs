// src/store.rs
//! Persistence of the name-day table.
//!
//! The on-disk shape is a plain JSON object, `{"MM-DD": ["name", ...]}`,
//! pretty printed, UTF-8 with non-ASCII left as is. Other consumers read the
//! same file, so the shape does not change.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};

use crate::data::NamedayTable;
use crate::error::{Error, Result};
use crate::file::write_atomic;

/// Load/save capability for the normalized table.
pub trait TableStore: Send + Sync {
    /// A store with nothing saved yet yields an empty table.
    fn load(&self) -> Result<NamedayTable>;
    fn save(&self, table: &NamedayTable) -> Result<()>;
}

/// JSON snapshot file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> Error {
        Error::Store { path: self.path.clone(), source }
    }
}

impl TableStore for FileStore {
    fn load(&self) -> Result<NamedayTable> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet");
                return Ok(NamedayTable::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };
        let table: NamedayTable = serde_json::from_str(&text)
            .map_err(|source| Error::Snapshot { path: self.path.clone(), source })?;
        info!(path = %self.path.display(), dates = table.len(), "loaded snapshot");
        Ok(table)
    }

    fn save(&self, table: &NamedayTable) -> Result<()> {
        let bytes = to_json_pretty(table)
            .map_err(|source| Error::Snapshot { path: self.path.clone(), source })?;
        write_atomic(&self.path, |w| w.write_all(&bytes)).map_err(|e| self.io_err(e))?;
        info!(path = %self.path.display(), dates = table.len(), "wrote snapshot");
        Ok(())
    }
}

/// Two-space indented JSON with a trailing newline.
pub fn to_json_pretty(table: &NamedayTable) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(table.len() * 48);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"  "));
    table.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
