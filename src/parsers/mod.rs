//! Record parsers for scraped output files

mod csv_parser;
mod json_array;
mod json_lines;

pub use csv_parser::CsvParser;
pub use json_array::JsonArrayParser;
pub use json_lines::JsonLinesParser;

use crate::types::{Record, Result};
use std::fs;
use std::path::Path;

/// Trait for parsing one file format into records
pub trait RecordParser: Send + Sync {
    /// Parser name (e.g., "csv")
    fn name(&self) -> &str;

    /// Lowercase file extensions handled by this parser, without the dot
    fn extensions(&self) -> &[&str];

    /// Parse raw file content. The buffer may be modified in place.
    fn parse_bytes(&self, data: &mut [u8]) -> Result<Vec<Record>>;

    /// Read and parse a whole file
    fn parse_file(&self, path: &Path) -> Result<Vec<Record>> {
        let mut data = fs::read(path)?;
        self.parse_bytes(&mut data)
    }
}

/// Registry of available parsers, dispatching on file extension
pub struct ParserRegistry {
    parsers: Vec<Box<dyn RecordParser>>,
    fallback: JsonArrayParser,
}

impl ParserRegistry {
    /// Create a new registry with default parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(CsvParser), Box::new(JsonLinesParser)],
            fallback: JsonArrayParser,
        }
    }

    /// Parser for `path`; unknown extensions are read as a JSON array
    pub fn for_path(&self, path: &Path) -> &dyn RecordParser {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        self.parsers
            .iter()
            .find(|p| p.extensions().contains(&ext.as_str()))
            .map(|p| p.as_ref())
            .unwrap_or(&self.fallback)
    }

    /// Find a parser by name
    pub fn get(&self, name: &str) -> Option<&dyn RecordParser> {
        if self.fallback.name() == name {
            return Some(&self.fallback as &dyn RecordParser);
        }
        self.parsers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
