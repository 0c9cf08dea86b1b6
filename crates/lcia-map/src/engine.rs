//! Flow-mapping engine.

use lcia_model::{CharacterizationRow, MappingEntry, MappingOptions};
use tracing::{debug, info, warn};

use crate::category::CategoryNormalizer;
use crate::duplicates::{DuplicateReport, find_duplicate_factors};
use crate::error::Result;
use crate::index::MappingIndex;
use crate::key::FlowKeyBuilder;
use crate::provider::MappingProvider;

#[derive(Debug, Clone, Default)]
enum MappingSource {
    #[default]
    Missing,
    /// Table supplied by the caller; used as-is even when empty.
    Override(Vec<MappingEntry>),
    /// Table loaded from a provider for the configured system.
    Loaded(Vec<MappingEntry>),
}

/// Counters collected during a mapping run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingStats {
    pub input_rows: usize,
    /// Input rows whose flow matched at least one target.
    pub matched: usize,
    /// Output rows created from matched rows (fan-out included).
    pub created: usize,
    /// Unmatched rows kept unchanged.
    pub preserved: usize,
    /// Unmatched rows dropped.
    pub unmapped: usize,
    /// False when no mapping was available and the table passed through.
    pub applied: bool,
    pub duplicates: DuplicateReport,
}

#[derive(Debug, Clone, Default)]
pub struct MappingOutcome {
    pub rows: Vec<CharacterizationRow>,
    pub stats: MappingStats,
}

/// Rewrites characterization-factor tables into a target flow system.
///
/// The mapping index is rebuilt on every [`Mapper::run`] call, so one mapper
/// can be reused across tables without carrying state between them.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    options: MappingOptions,
    source: MappingSource,
}

impl Mapper {
    pub fn new(options: MappingOptions) -> Self {
        Self {
            options,
            source: MappingSource::Missing,
        }
    }

    /// Uses `entries` instead of asking a provider. Entries are still filtered
    /// by the configured system, if any.
    pub fn with_mapping(mut self, entries: Vec<MappingEntry>) -> Self {
        self.source = MappingSource::Override(entries);
        self
    }

    /// Loads the configured system's table from `provider`. Without a
    /// configured system nothing is loaded.
    pub fn with_provider<P>(mut self, provider: &P) -> Result<Self>
    where
        P: MappingProvider + ?Sized,
    {
        if let Some(system) = self.options.system.as_deref() {
            let entries = provider.load(system)?;
            self.source = MappingSource::Loaded(entries);
        }
        Ok(self)
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    pub fn key_builder(&self) -> FlowKeyBuilder {
        FlowKeyBuilder::new(CategoryNormalizer::new(self.options.unspecified))
    }

    /// Maps every row; see [`MappingStats`] for what is counted.
    pub fn run(&self, rows: &[CharacterizationRow]) -> Result<MappingOutcome> {
        let system = self.options.system.as_deref();
        let entries = match &self.source {
            MappingSource::Missing => {
                warn!("no flow mapping supplied; table returned unchanged");
                return Ok(passthrough(rows));
            }
            MappingSource::Loaded(entries) if entries.is_empty() => {
                warn!(
                    system = system.unwrap_or_default(),
                    "no mapping entries found for system; table returned unchanged"
                );
                return Ok(passthrough(rows));
            }
            MappingSource::Override(entries) | MappingSource::Loaded(entries) => entries,
        };

        let keys = self.key_builder();
        let index = MappingIndex::build(entries, system, &keys)?;
        let mut stats = MappingStats {
            input_rows: rows.len(),
            applied: true,
            ..Default::default()
        };
        let mut output = Vec::with_capacity(rows.len());

        for row in rows {
            let key = keys.key(&row.flow_id, &row.flowable, &row.context, &row.unit);
            match index.get(&key) {
                Some(targets) => {
                    stats.matched += 1;
                    for target in targets {
                        let mut mapped = row.clone();
                        mapped.flowable = target.name.clone();
                        mapped.flow_id = target.id.clone();
                        mapped.context = target.context.clone();
                        mapped.unit = target.unit.clone();
                        mapped.characterization_factor =
                            target.convert(row.characterization_factor);
                        output.push(mapped);
                        stats.created += 1;
                    }
                }
                None if self.options.preserve_unmapped => {
                    output.push(row.clone());
                    stats.preserved += 1;
                }
                None => {
                    debug!(flow_key = %key, "no mapping for flow");
                    stats.unmapped += 1;
                }
            }
        }

        info!(
            created = stats.created,
            preserved = stats.preserved,
            dropped = stats.unmapped,
            "created factors for mapped flows; preserved factors for unmapped flows"
        );

        stats.duplicates = find_duplicate_factors(&output);
        if !stats.duplicates.is_empty() {
            warn!(
                combinations = stats.duplicates.combinations.len(),
                factors = stats.duplicates.factor_count,
                "mapping produced duplicate characterization factors; consider collapsing"
            );
        }

        Ok(MappingOutcome {
            rows: output,
            stats,
        })
    }
}

fn passthrough(rows: &[CharacterizationRow]) -> MappingOutcome {
    MappingOutcome {
        rows: rows.to_vec(),
        stats: MappingStats {
            input_rows: rows.len(),
            preserved: rows.len(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(flowable: &str, context: &str, factor: f64) -> CharacterizationRow {
        CharacterizationRow {
            method: "TRACI 2.1".to_string(),
            indicator: "Global warming".to_string(),
            flowable: flowable.to_string(),
            context: context.to_string(),
            unit: "kg".to_string(),
            characterization_factor: factor,
            ..Default::default()
        }
    }

    #[test]
    fn missing_mapping_is_identity() {
        let rows = vec![row("Methane", "air", 25.0)];
        let outcome = Mapper::new(MappingOptions::new()).run(&rows).unwrap();
        assert_eq!(outcome.rows, rows);
        assert!(!outcome.stats.applied);
    }

    #[test]
    fn provider_without_entries_for_system_is_identity() {
        let table: Vec<MappingEntry> = Vec::new();
        let rows = vec![row("Methane", "air", 25.0)];
        let outcome = Mapper::new(MappingOptions::new().with_system("TRACI2.1"))
            .with_provider(&table)
            .unwrap()
            .run(&rows)
            .unwrap();
        assert_eq!(outcome.rows, rows);
        assert!(!outcome.stats.applied);
    }

    #[test]
    fn explicit_empty_override_drops_everything() {
        let rows = vec![row("Methane", "air", 25.0)];
        let outcome = Mapper::new(MappingOptions::new())
            .with_mapping(Vec::new())
            .run(&rows)
            .unwrap();
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.stats.unmapped, 1);
        assert!(outcome.stats.applied);
    }
}
