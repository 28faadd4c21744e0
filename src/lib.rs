// codebundle - bundle a project's source files into one text file
// Library exports

// Core modules
pub mod aggregator;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;

pub use aggregator::{aggregate, aggregate_with, AggregateReport};
pub use config::AggregateConfig;
pub use errors::{AggregateError, SkipReason, SkippedFile};
