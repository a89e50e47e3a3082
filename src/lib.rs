//! coordavg - LaTeX coordinate list averager
//!
//! Reads a coordinate list written as LaTeX tuples
//! (`\left(x_1,y_1\right),\left(x_2,y_2\right),...`), prints the mean of the
//! x values and of the y values, and rewrites the points as a plain
//! `(x_1,y_1),(x_2,y_2),...` list.
//!
//! # Architecture
//!
//! - **parse**: delimiter split, prefix/suffix stripping, x/y extraction
//! - **stats**: running totals and means
//! - **output**: stdout means, normalized point list, JSON summary
//! - **util**: read-back verification of the written point list
//! - **config**: CLI, TOML file, validation
//! - **averager**: the end-to-end pipeline

pub mod averager;
pub mod config;
pub mod output;
pub mod parse;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use averager::{average, run, Averaged};
pub use config::Config;
pub use parse::{Coordinate, ParseError};

/// Result type used throughout coordavg
pub type Result<T> = anyhow::Result<T>;
