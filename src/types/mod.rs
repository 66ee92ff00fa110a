//! Type definitions for bookstat

mod error;
mod record;

pub use error::*;
pub use record::*;
