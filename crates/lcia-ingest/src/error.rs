//! Error types for LCIA table ingestion.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading or writing LCIA tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read or create a file.
    #[error("failed to access file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to serialize rows.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A cell that must hold a number does not.
    #[error("invalid {field} value '{value}' in {path} (row {row})")]
    InvalidValue {
        field: String,
        value: String,
        path: PathBuf,
        row: usize,
    },
}

impl IngestError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, error: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
