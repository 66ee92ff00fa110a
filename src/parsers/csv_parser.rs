//! CSV parser: header row names the fields, every value is text

use crate::types::{Record, Result};

use super::RecordParser;

/// Parser for CSV exports
pub struct CsvParser;

impl RecordParser for CsvParser {
    fn name(&self) -> &str {
        "csv"
    }

    fn extensions(&self) -> &[&str] {
        &["csv"]
    }

    fn parse_bytes(&self, data: &mut [u8]) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(&data[..]);
        let headers = reader.headers()?.clone();

        let mut records: Vec<Record> = Vec::new();
        for row in reader.records() {
            let row = row?;
            // Short rows simply lack the trailing columns
            records.push(headers.iter().zip(row.iter()).collect());
        }

        Ok(records)
    }
}
