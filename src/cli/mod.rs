use clap::{ArgGroup, Parser};
use tracing::debug;

pub mod menu;
mod report;

pub use report::Report;

use crate::logging;
use crate::services::{load_records, Aggregator};
use crate::types::{BookstatError, Record, Result, DEFAULT_PRICE_FIELD};

/// Analyze scraped book data (JSON/JSONL/CSV)
#[derive(Parser, Debug)]
#[command(name = "bookstat")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["count_category", "avg_all", "avg_category", "count_range"])
))]
pub struct Cli {
    /// Path to input file (json, jl, jsonl, csv)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Count number of books in CATEGORY
    #[arg(long, value_name = "CATEGORY")]
    count_category: Option<String>,

    /// Average price of all books
    #[arg(long)]
    avg_all: bool,

    /// Average price of books in CATEGORY
    #[arg(long, value_name = "CATEGORY")]
    avg_category: Option<String>,

    /// Count books with price between MIN and MAX
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_hyphen_values = true)]
    count_range: Option<Vec<String>>,

    /// Field name for price
    #[arg(long, default_value = DEFAULT_PRICE_FIELD, env = "BOOKSTAT_PRICE_FIELD")]
    price_field: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Log loader activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        logging::init(self.verbose);

        let records = load_records(&self.input)?;

        match self.report(&records) {
            Ok(report) if self.json => println!("{}", serde_json::to_string_pretty(&report)?),
            Ok(report) => println!("{}", report),
            // Bad numeric input aborts the query, not the process
            Err(BookstatError::Config(msg)) => println!("{}", msg),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Run the selected query over `records`
    pub fn report(&self, records: &[Record]) -> Result<Report> {
        let price_field = self.price_field.clone();

        if let Some(category) = &self.count_category {
            return Ok(Report::CategoryCount {
                count: Aggregator::count_books_in_category(records, category),
                category: category.clone(),
            });
        }

        if self.avg_all {
            return Ok(Report::AverageAll {
                average: Aggregator::average_price_all(records, &price_field),
                price_field,
            });
        }

        if let Some(category) = &self.avg_category {
            return Ok(Report::AverageInCategory {
                average: Aggregator::average_price_in_category(records, category, &price_field),
                category: category.clone(),
                price_field,
            });
        }

        if let Some([min, max]) = self.count_range.as_deref() {
            let (Some(min), Some(max)) = (parse_bound(min), parse_bound(max)) else {
                debug!(bounds = ?self.count_range, "rejected non-numeric range");
                return Err(BookstatError::Config("MIN and MAX must be numeric".into()));
            };
            return Ok(Report::RangeCount {
                count: Aggregator::count_books_in_price_range(records, min, max, &price_field),
                min,
                max,
                price_field,
            });
        }

        Err(BookstatError::Config("no query selected".into()))
    }
}

/// Parse a user-typed price bound
pub(crate) fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
