// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod pricing;

// Re-export commonly used types
pub use crate::core::{ChargeMap, Product};

pub use crate::pricing::{
    compute_over_threshold, compute_over_threshold_imperative, mismatched_ids, qualifies,
    Strategy, THRESHOLD,
};

pub use crate::errors::{ErrorCode, PriceFilterError};

pub use crate::io::output::{create_writer, FilterReport, OutputFormat, OutputWriter};
