//! Query results and their text / JSON rendering

use serde::Serialize;
use std::fmt;

/// Result of one CLI query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Report {
    CategoryCount {
        category: String,
        count: usize,
    },
    AverageAll {
        price_field: String,
        average: Option<f64>,
    },
    AverageInCategory {
        category: String,
        price_field: String,
        average: Option<f64>,
    },
    RangeCount {
        min: f64,
        max: f64,
        price_field: String,
        count: usize,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::CategoryCount { category, count } => {
                write!(f, "Count books in category '{}': {}", category, count)
            }
            Report::AverageAll { average: None, .. } => {
                write!(f, "No prices found to compute average")
            }
            Report::AverageAll {
                average: Some(avg), ..
            } => write!(f, "Average price (all books): £{:.2}", avg),
            Report::AverageInCategory {
                category,
                average: None,
                ..
            } => write!(f, "No prices found in category '{}'", category),
            Report::AverageInCategory {
                category,
                average: Some(avg),
                ..
            } => write!(f, "Average price in category '{}': £{:.2}", category, avg),
            Report::RangeCount {
                min, max, count, ..
            } => write!(f, "Count books in range £{:.2} - £{:.2}: {}", min, max, count),
        }
    }
}
