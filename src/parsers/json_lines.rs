//! JSON Lines parser: one object per non-blank line

use crate::types::{BookstatError, Record, Result};

use super::RecordParser;

/// Parser for JSON Lines feeds (`.jl`, `.jsonl`)
pub struct JsonLinesParser;

impl RecordParser for JsonLinesParser {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn extensions(&self) -> &[&str] {
        &["jl", "jsonl"]
    }

    fn parse_bytes(&self, data: &mut [u8]) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        for (idx, line) in data.split_mut(|b| *b == b'\n').enumerate() {
            let line = trim_ascii_mut(line);
            if line.is_empty() {
                continue;
            }

            let record: Record = simd_json::from_slice(line)
                .map_err(|e| BookstatError::Parse(format!("line {}: {}", idx + 1, e)))?;
            records.push(record);
        }

        Ok(records)
    }
}

fn trim_ascii_mut(line: &mut [u8]) -> &mut [u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &mut line[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Vec<Record>> {
        let mut data = content.as_bytes().to_vec();
        JsonLinesParser.parse_bytes(&mut data)
    }

    #[test]
    fn test_parse_lines() {
        let records = parse(
            "{\"price\": \"£10.00\", \"category\": \"Travel\"}\n{\"price\": 30, \"category\": [\"Travel\"]}\n",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("price"), Some(&FieldValue::from("£10.00")));
        assert_eq!(records[1].get("price"), Some(&FieldValue::Number(30.0)));
    }

    #[test]
    fn test_skip_blank_lines_and_crlf() {
        let records = parse("\n{\"a\": 1}\r\n   \r\n{\"a\": 2}\r\n\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_line_reports_line_number() {
        let err = parse("{\"a\": 1}\n{not json}\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_non_object_line_is_error() {
        let err = parse("{\"a\": 1}\n[1, 2]\n").unwrap_err();
        assert!(matches!(err, BookstatError::Parse(_)));
    }

    #[test]
    fn test_trim_ascii_mut() {
        let mut buf = b"  {}\r".to_vec();
        assert_eq!(trim_ascii_mut(&mut buf), b"{}");
        let mut blank = b" \t ".to_vec();
        assert!(trim_ascii_mut(&mut blank).is_empty());
    }

    #[test]
    fn test_parse_fixture() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("books.jl");
        let records = JsonLinesParser.parse_file(&path).unwrap();
        assert_eq!(records.len(), 5);
    }
}
