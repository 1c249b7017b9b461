// File: crates/petalplot-core/src/error.rs
// Summary: Error type for dataset loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A required header is absent from the CSV.
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, ChartError>;
