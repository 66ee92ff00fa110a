//! Price and category statistics over scraped book records.
//!
//! Records are loaded from JSON, JSON Lines or CSV into schema-less
//! [`types::Record`] maps; [`services::Aggregator`] answers category counts,
//! price averages and price-range counts over them.

pub mod cli;
pub mod logging;
pub mod parsers;
pub mod services;
pub mod types;
