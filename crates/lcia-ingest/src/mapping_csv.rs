//! Flow mapping files.

use std::path::{Path, PathBuf};

use lcia_map::{MapError, MappingProvider};
use lcia_model::{MappingEntry, mapping_columns};
use tracing::info;

use crate::error::{IngestError, Result};

/// Reads a flow mapping file (`SourceListName`, `SourceFlowName`, ...,
/// `ConversionFactor`).
///
/// A blank conversion factor means 1; a non-numeric one is an error rather
/// than a silent default.
pub fn read_mapping_csv(path: &Path) -> Result<Vec<MappingEntry>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();

    for required in mapping_columns::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn {
                column: required.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut entries = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        let get = |name: &str| -> String {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        let factor = get(mapping_columns::CONVERSION_FACTOR);
        let conversion_factor = if factor.is_empty() {
            None
        } else {
            Some(factor.parse().map_err(|_| IngestError::InvalidValue {
                field: mapping_columns::CONVERSION_FACTOR.to_string(),
                value: factor.clone(),
                path: path.to_path_buf(),
                row: idx + 1,
            })?)
        };

        entries.push(MappingEntry {
            source_list: get(mapping_columns::SOURCE_LIST_NAME),
            source_id: get(mapping_columns::SOURCE_FLOW_UUID),
            source_name: get(mapping_columns::SOURCE_FLOW_NAME),
            source_context: get(mapping_columns::SOURCE_FLOW_CONTEXT),
            source_unit: get(mapping_columns::SOURCE_UNIT),
            target_id: get(mapping_columns::TARGET_FLOW_UUID),
            target_name: get(mapping_columns::TARGET_FLOW_NAME),
            target_context: get(mapping_columns::TARGET_FLOW_CONTEXT),
            target_unit: get(mapping_columns::TARGET_UNIT),
            conversion_factor,
        });
    }

    info!(path = %path.display(), entries = entries.len(), "read flow mapping file");
    Ok(entries)
}

/// Mapping provider backed by a mapping file.
///
/// The file is read on every [`MappingProvider::load`] call.
#[derive(Debug, Clone)]
pub struct CsvMappingProvider {
    path: PathBuf,
}

impl CsvMappingProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every entry of the file, regardless of system.
    pub fn load_all(&self) -> Result<Vec<MappingEntry>> {
        read_mapping_csv(&self.path)
    }
}

impl MappingProvider for CsvMappingProvider {
    fn load(&self, system: &str) -> lcia_map::Result<Vec<MappingEntry>> {
        let entries = self
            .load_all()
            .map_err(|e| MapError::provider(system, e))?;
        entries.load(system)
    }
}
