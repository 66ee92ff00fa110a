//! Aggregator service for computing book statistics

use crate::services::normalizer::{normalize_category, normalize_price_field};
use crate::types::{Record, CATEGORY_FIELDS};

/// Aggregator for category counts and price statistics.
///
/// All queries are single pass over the records and skip fields that do
/// not normalize. Averages return `None` when no price could be read.
pub struct Aggregator;

impl Aggregator {
    /// Count records whose category matches `category` (case-insensitive, trimmed)
    pub fn count_books_in_category(records: &[Record], category: &str) -> usize {
        let target = category.trim().to_lowercase();
        records
            .iter()
            .filter(|r| in_category(r, &target))
            .count()
    }

    /// Mean of every readable price
    pub fn average_price_all(records: &[Record], price_field: &str) -> Option<f64> {
        mean(
            records
                .iter()
                .filter_map(|r| normalize_price_field(r.get(price_field))),
        )
    }

    /// Mean of the readable prices within one category
    pub fn average_price_in_category(
        records: &[Record],
        category: &str,
        price_field: &str,
    ) -> Option<f64> {
        let target = category.trim().to_lowercase();
        mean(
            records
                .iter()
                .filter(|r| in_category(r, &target))
                .filter_map(|r| normalize_price_field(r.get(price_field))),
        )
    }

    /// Count records priced within `[min, max]`; bounds may come in either order
    pub fn count_books_in_price_range(
        records: &[Record],
        min: f64,
        max: f64,
        price_field: &str,
    ) -> usize {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        records
            .iter()
            .filter_map(|r| normalize_price_field(r.get(price_field)))
            .filter(|p| (lo..=hi).contains(p))
            .count()
    }
}

/// `target` must already be trimmed and lowercased
fn in_category(record: &Record, target: &str) -> bool {
    record
        .first_of(CATEGORY_FIELDS)
        .and_then(normalize_category)
        .is_some_and(|c| c == target)
}

fn mean(prices: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = prices.fold((0.0, 0usize), |(sum, n), p| (sum + p, n + 1));
    (count > 0).then(|| sum / count as f64)
}
