//! Record loading for the CLI and the interactive menu

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::parsers::ParserRegistry;
use crate::types::{Record, Result};

/// Loads records from a file, picking the parser by extension
pub struct DataLoaderService {
    registry: ParserRegistry,
}

impl DataLoaderService {
    pub fn new() -> Self {
        Self {
            registry: ParserRegistry::new(),
        }
    }

    /// Load every record in the file at `raw_path`.
    ///
    /// Double quotes are removed from the path first, so a path pasted
    /// from a file manager (`"C:\books.csv"`) works as typed.
    pub fn load(&self, raw_path: &str) -> Result<Vec<Record>> {
        let path = clean_path(raw_path);
        let parser = self.registry.for_path(&path);
        debug!(path = %path.display(), parser = parser.name(), "loading records");

        let records = parser.parse_file(&path)?;
        if records.is_empty() {
            warn!(path = %path.display(), "file contains no records");
        }
        debug!(count = records.len(), "records loaded");
        Ok(records)
    }
}

impl Default for DataLoaderService {
    fn default() -> Self {
        Self::new()
    }
}

/// Load records with the default parser registry
pub fn load_records(raw_path: &str) -> Result<Vec<Record>> {
    DataLoaderService::new().load(raw_path)
}

fn clean_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.replace('"', "").trim())
}
