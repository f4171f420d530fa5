// File: crates/endlabel-core/src/error.rs
// Summary: Typed errors for input validation and CSV loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series '{category}' has no points")]
    EmptySeries { category: String },

    #[error("series '{category}' has a non-finite coordinate at point {index}")]
    NonFiniteCoordinate { category: String, index: usize },

    #[error("csv line {line}: {message}")]
    Csv { line: u64, message: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
