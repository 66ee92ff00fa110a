//! Services for record loading, normalization and aggregation

pub mod aggregator;
pub mod data_loader;
pub mod normalizer;

pub use aggregator::Aggregator;
pub use data_loader::{load_records, DataLoaderService};
pub use normalizer::{normalize_category, normalize_price};
