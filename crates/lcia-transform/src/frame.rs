//! Conversion between canonical rows and polars DataFrames.
//!
//! Library entry point for columnar consumers: the CLI reads and writes CSV
//! through `lcia-ingest`, while callers that already hold a `DataFrame` hand it
//! to [`frame_to_rows`], run the mapping, and get a frame back from
//! [`rows_to_frame`].
//!
//! ```no_run
//! use lcia_map::Mapper;
//! use lcia_model::MappingOptions;
//! use lcia_transform::{frame_to_rows, rows_to_frame};
//! # fn remap(frame: &polars::prelude::DataFrame) -> lcia_transform::Result<polars::prelude::DataFrame> {
//! let rows = frame_to_rows(frame)?;
//! let outcome = Mapper::new(MappingOptions::new()).run(&rows)?;
//! rows_to_frame(&outcome.rows)
//! # }
//! ```

use lcia_model::{CharacterizationRow, columns};
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};

use crate::error::{Result, TransformError};

/// Builds a DataFrame with one column per canonical column, in canonical
/// order. Text columns are strings, the factor column is `f64`.
pub fn rows_to_frame(rows: &[CharacterizationRow]) -> Result<DataFrame> {
    let mut frame_columns: Vec<Column> = Vec::with_capacity(columns::ALL.len());
    for column in columns::ALL {
        if column == columns::CHARACTERIZATION_FACTOR {
            let values: Vec<f64> = rows.iter().map(|row| row.characterization_factor).collect();
            frame_columns.push(Series::new(column.into(), values).into());
            continue;
        }
        let values: Vec<&str> = rows
            .iter()
            .map(|row| row.text(column).unwrap_or_default())
            .collect();
        frame_columns.push(Series::new(column.into(), values).into());
    }
    Ok(DataFrame::new(frame_columns)?)
}

/// Reads canonical rows back out of a DataFrame.
///
/// `Characterization Factor`, `Flowable` and `Context` are required; other
/// canonical columns default to empty. Text cells must be strings (nulls read
/// as empty) and every factor must be a number.
pub fn frame_to_rows(df: &DataFrame) -> Result<Vec<CharacterizationRow>> {
    for required in columns::REQUIRED {
        if df.column(required).is_err() {
            return Err(TransformError::MissingColumn(required.to_string()));
        }
    }

    let mut rows = vec![CharacterizationRow::default(); df.height()];
    for column in columns::ALL {
        let Ok(series) = df.column(column) else {
            continue;
        };
        for (idx, row) in rows.iter_mut().enumerate() {
            let value = series.get(idx)?;
            if column == columns::CHARACTERIZATION_FACTOR {
                row.characterization_factor = factor_value(column, idx, value)?;
            } else if let Some(cell) = row.text_mut(column) {
                *cell = text_value(column, idx, value)?;
            }
        }
    }
    Ok(rows)
}

fn text_value(column: &str, row: usize, value: AnyValue<'_>) -> Result<String> {
    match value {
        AnyValue::Null => Ok(String::new()),
        AnyValue::String(s) => Ok(s.to_string()),
        AnyValue::StringOwned(s) => Ok(s.to_string()),
        other => Err(TransformError::ColumnType {
            column: column.to_string(),
            row,
            expected: "string",
            found: other.dtype().to_string(),
        }),
    }
}

fn factor_value(column: &str, row: usize, value: AnyValue<'_>) -> Result<f64> {
    match value {
        AnyValue::Float64(v) => Ok(v),
        AnyValue::Float32(v) => Ok(f64::from(v)),
        AnyValue::Int64(v) => Ok(v as f64),
        AnyValue::Int32(v) => Ok(f64::from(v)),
        AnyValue::UInt32(v) => Ok(f64::from(v)),
        AnyValue::Null => Err(TransformError::MissingValue {
            column: column.to_string(),
            row,
        }),
        other => Err(TransformError::ColumnType {
            column: column.to_string(),
            row,
            expected: "numeric",
            found: other.dtype().to_string(),
        }),
    }
}
