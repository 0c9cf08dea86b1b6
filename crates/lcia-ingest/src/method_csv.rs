//! Canonical method tables stored as CSV.

use std::path::Path;

use lcia_model::{CharacterizationRow, columns};
use tracing::{debug, info};

use crate::cas::format_cas;
use crate::error::{IngestError, Result};

/// Reads a method table with canonical column headers.
///
/// `Characterization Factor`, `Flowable` and `Context` must be present; every
/// other canonical column is optional and defaults to empty. Unknown columns
/// are ignored. CAS numbers are normalized with [`format_cas`].
pub fn read_method_csv(path: &Path) -> Result<Vec<CharacterizationRow>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();

    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn {
                column: required.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    let ignored: Vec<&str> = headers
        .iter()
        .filter(|h| !columns::ALL.contains(h))
        .collect();
    if !ignored.is_empty() {
        debug!(path = %path.display(), ?ignored, "ignoring non-canonical columns");
    }

    let mut rows = Vec::new();
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

        let mut row = CharacterizationRow::default();
        for column in columns::ALL {
            if let Some(cell) = row.text_mut(column) {
                *cell = get(column);
            }
        }
        row.cas_number = format_cas(&row.cas_number);

        let factor = get(columns::CHARACTERIZATION_FACTOR);
        row.characterization_factor = factor.parse().map_err(|_| IngestError::InvalidValue {
            field: columns::CHARACTERIZATION_FACTOR.to_string(),
            value: factor.clone(),
            path: path.to_path_buf(),
            row: idx + 1,
        })?;
        rows.push(row);
    }

    info!(path = %path.display(), rows = rows.len(), "read method table");
    Ok(rows)
}

/// Writes rows with canonical headers in canonical column order.
pub fn write_method_csv(path: &Path, rows: &[CharacterizationRow]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| IngestError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);
    let write_error = |e: csv::Error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    if rows.is_empty() {
        writer.write_record(columns::ALL).map_err(write_error)?;
    }
    for row in rows {
        writer.serialize(row).map_err(write_error)?;
    }
    writer.flush().map_err(|e| IngestError::io(path, e))?;
    info!(path = %path.display(), rows = rows.len(), "wrote method table");
    Ok(())
}
