//! JSON parser: the whole file is one array of objects

use crate::types::{BookstatError, FieldValue, Record, Result};

use super::RecordParser;

/// Parser for JSON array exports; also the fallback for unknown extensions
pub struct JsonArrayParser;

impl RecordParser for JsonArrayParser {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse_bytes(&self, data: &mut [u8]) -> Result<Vec<Record>> {
        let value: FieldValue =
            simd_json::from_slice(data).map_err(|e| BookstatError::Parse(e.to_string()))?;

        let FieldValue::List(items) = value else {
            return Err(BookstatError::Parse(
                "JSON file does not contain a list of items".into(),
            ));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                FieldValue::Map(fields) => Ok(Record::from(fields)),
                _ => Err(BookstatError::Parse(format!(
                    "item {} is not an object",
                    idx
                ))),
            })
            .collect()
    }
}
