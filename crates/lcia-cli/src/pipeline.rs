//! The `map` pipeline: read, map, consolidate, subset, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lcia_ingest::{CanonicalCsvSource, CsvMappingProvider, MethodSource, write_method_csv};
use lcia_map::{Mapper, MappingOutcome, MappingStats, supported_mapping_systems};
use lcia_model::{CharacterizationRow, MappingEntry, MappingOptions, Method};
use lcia_transform::{
    collapse_indicators, filter_indicators, filter_methods, lowercase_flowables, map_method,
};

/// Environment variable naming the default flow mapping file.
pub const MAPPING_ENV_VAR: &str = "LCIA_FLOW_MAPPING";

/// Mapping file from `LCIA_FLOW_MAPPING`, if set and non-empty.
pub fn default_mapping_file() -> Option<PathBuf> {
    std::env::var_os(MAPPING_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Everything one `map` run needs.
#[derive(Debug, Clone, Default)]
pub struct MapRequest {
    pub input: PathBuf,
    pub mapping: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Supported method the input holds; supplies the default system and case
    /// sensitivity and always consolidates.
    pub method: Option<Method>,
    pub options: MappingOptions,
    pub collapse: bool,
    pub indicators: Vec<String>,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MapSummary {
    pub input: PathBuf,
    pub system: Option<String>,
    pub output: Option<PathBuf>,
    pub output_rows: usize,
    pub stats: MappingStats,
}

pub fn run_mapping(request: &MapRequest) -> Result<MapSummary> {
    let span = info_span!("map", input = %request.input.display());
    let _guard = span.enter();

    let mut source = CanonicalCsvSource::new(&request.input);
    if let Some(method) = request.method {
        source = source.with_method(method);
    }
    let mut rows = source
        .read()
        .with_context(|| format!("read method table {}", request.input.display()))?;
    if request.method.is_none() && request.options.case_insensitive {
        lowercase_flowables(&mut rows);
    }

    let provider = request.mapping.as_deref().map(CsvMappingProvider::new);
    let outcome = match (request.method, &provider) {
        (Some(method), Some(provider)) => {
            map_method(rows, method, request.options.clone(), provider).context("map flows")?
        }
        (Some(method), None) => {
            let no_mapping: Vec<MappingEntry> = Vec::new();
            map_method(rows, method, request.options.clone(), &no_mapping).context("map flows")?
        }
        (None, provider) => map_rows(&rows, request, provider.as_ref()).context("map flows")?,
    };

    let system = outcome_system(request);
    let mut rows = outcome.rows;
    if request.method.is_none() && request.collapse && outcome.stats.applied {
        rows = collapse_indicators(&rows);
    }
    if !request.indicators.is_empty() {
        rows = filter_indicators(rows, &request.indicators);
    }
    if !request.methods.is_empty() {
        rows = filter_methods(rows, &request.methods);
    }

    if let Some(path) = &request.output {
        write_method_csv(path, &rows)
            .with_context(|| format!("write mapped table {}", path.display()))?;
    }
    info!(rows = rows.len(), "mapping finished");

    Ok(MapSummary {
        input: request.input.clone(),
        system,
        output: request.output.clone(),
        output_rows: rows.len(),
        stats: outcome.stats,
    })
}

/// Maps a table that is not one of the supported methods. Without a system,
/// every entry of the mapping file applies.
fn map_rows(
    rows: &[CharacterizationRow],
    request: &MapRequest,
    provider: Option<&CsvMappingProvider>,
) -> Result<MappingOutcome> {
    let mut mapper = Mapper::new(request.options.clone());
    match provider {
        Some(provider) if request.options.system.is_none() => {
            let entries = provider
                .load_all()
                .with_context(|| format!("read mapping file {}", provider.path().display()))?;
            mapper = mapper.with_mapping(entries);
        }
        Some(provider) => {
            mapper = mapper.with_provider(provider)?;
        }
        None => {}
    }
    Ok(mapper.run(rows)?)
}

fn outcome_system(request: &MapRequest) -> Option<String> {
    request.options.system.clone().or_else(|| {
        request
            .method
            .and_then(|method| method.metadata().ok())
            .and_then(|metadata| metadata.mapping)
    })
}

/// Distinct mapping systems listed in a mapping file.
pub fn list_systems(mapping: &Path) -> Result<Vec<String>> {
    let entries = CsvMappingProvider::new(mapping)
        .load_all()
        .with_context(|| format!("read mapping file {}", mapping.display()))?;
    Ok(supported_mapping_systems(&entries))
}
