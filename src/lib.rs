//! Shape sorting toolkit
//!
//! Loads geometric solids from a text file, ranks them by height, base area
//! or volume, and orders them with one of six classical comparison sorts
//! while timing each run.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Domain model and sorting engine
pub mod shape;
pub mod metric;
pub mod algorithms;

// Input, orchestration and presentation
pub mod loader;
pub mod runner;
pub mod report;

// Re-export commonly used types
pub use algorithms::SortAlgorithm;
pub use config::{RunConfig, RunConfigBuilder, SortOrder};
pub use error::{ShapeSortError, ShapeSortResult};
pub use metric::Metric;
pub use runner::SortRun;
pub use shape::{Shape, ShapeKind};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const IO_FAILURE: i32 = 2;

/// Run the configured sort and print the report to stdout
pub fn sort(config: &RunConfig) -> ShapeSortResult<i32> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner::run(config, &mut out)?;
    Ok(EXIT_SUCCESS)
}
