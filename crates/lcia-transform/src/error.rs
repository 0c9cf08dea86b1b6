//! Error types for method transformations.

use lcia_map::MapError;
use lcia_model::LciaError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("required column '{0}' not found in DataFrame")]
    MissingColumn(String),

    #[error("column '{column}' holds {found} values at row {row}, expected {expected}")]
    ColumnType {
        column: String,
        row: usize,
        expected: &'static str,
        found: String,
    },

    #[error("column '{column}' has no value at row {row}")]
    MissingValue { column: String, row: usize },

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Method(#[from] LciaError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
