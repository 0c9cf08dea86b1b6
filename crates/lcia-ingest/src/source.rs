//! Method source adapters.

use std::path::{Path, PathBuf};

use lcia_model::{CharacterizationRow, Method};

use crate::error::Result;
use crate::method_csv::read_method_csv;

/// Produces a method's characterization factors in the canonical schema.
///
/// One implementation exists per publisher format; the adapter is chosen once
/// and the mapping core only ever sees canonical rows.
pub trait MethodSource {
    /// Supported method this source provides, if it is one of them.
    fn method(&self) -> Option<Method>;

    fn read(&self) -> Result<Vec<CharacterizationRow>>;
}

/// A method already stored as a canonical CSV table.
#[derive(Debug, Clone)]
pub struct CanonicalCsvSource {
    path: PathBuf,
    method: Option<Method>,
}

impl CanonicalCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            method: None,
        }
    }

    /// Declares the table to hold `method`; rows without a method name get
    /// the method's display name.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MethodSource for CanonicalCsvSource {
    fn method(&self) -> Option<Method> {
        self.method
    }

    fn read(&self) -> Result<Vec<CharacterizationRow>> {
        let mut rows = read_method_csv(&self.path)?;
        if let Some(method) = self.method {
            for row in rows.iter_mut().filter(|row| row.method.is_empty()) {
                row.method = method.name().to_string();
            }
        }
        Ok(rows)
    }
}
