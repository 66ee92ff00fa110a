//! Price and category normalization
//!
//! Scraped records carry prices in whatever shape the spider produced:
//! plain numbers, currency strings, strings wrapped in parentheses by a
//! stray trailing comma, or stringified lists. Everything here is total:
//! unparseable input maps to `None` and never to an error.

use crate::types::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

/// Currency symbols stripped before the numeric parse
const CURRENCY_SYMBOLS: &[char] = &['£', '$', '€', '¥'];

/// First item of a Python-style list literal: `['x', ...]`, `["x"]` or `[x]`
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\[\s*(?:'([^']*)'|"([^"]*)"|([^\s,'"\]]+))"#).expect("valid regex")
});

/// Normalize a raw price value to a finite float.
///
/// Accepted shapes:
/// - numbers: returned as-is
/// - `"£51.77"`, `"$5"`: currency symbol removed
/// - `"(£51.77)"`: surrounding parentheses removed
/// - `"1,234.56"`: thousand separators removed
/// - `"['£51.77']"`, `"[51.77]"`: first list item, normalized recursively
///
/// # Examples
/// ```
/// use bookstat::services::normalizer::normalize_price;
/// use bookstat::types::FieldValue;
///
/// assert_eq!(normalize_price(&FieldValue::from("(£51.77)")), Some(51.77));
/// assert_eq!(normalize_price(&FieldValue::from("abc")), None);
/// ```
pub fn normalize_price(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(n) => finite(*n),
        FieldValue::Text(s) => parse_price_text(s),
        _ => None,
    }
}

/// Normalize an optional field; a missing field has no price
pub fn normalize_price_field(value: Option<&FieldValue>) -> Option<f64> {
    value.and_then(normalize_price)
}

fn parse_price_text(raw: &str) -> Option<f64> {
    let mut s = raw.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        s = inner.trim();
    }

    let cleaned: String = s
        .chars()
        .filter(|c| *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.starts_with('[') && cleaned.ends_with(']') {
        if let Some(first) = first_list_item(cleaned) {
            return normalize_price(&first);
        }
    }

    cleaned.parse::<f64>().ok().and_then(finite)
}

/// First element of a list literal, or `None` for empty/unparseable lists
fn first_list_item(s: &str) -> Option<FieldValue> {
    if let Ok(items) = serde_json::from_str::<Vec<FieldValue>>(s) {
        return items.into_iter().next();
    }

    let caps = LIST_ITEM.captures(s)?;
    (1..=3)
        .find_map(|i| caps.get(i))
        .map(|m| FieldValue::from(m.as_str()))
}

fn finite(n: f64) -> Option<f64> {
    n.is_finite().then_some(n)
}

/// Normalize a category value to its comparison key.
///
/// List values contribute only their first element. Only text matches;
/// the key is trimmed and lowercased.
pub fn normalize_category(value: &FieldValue) -> Option<String> {
    let value = match value {
        FieldValue::List(items) => items.first()?,
        other => other,
    };
    value.as_text().map(|s| s.trim().to_lowercase())
}
