//! Sources of flow mapping tables.

use std::collections::BTreeSet;

use lcia_model::MappingEntry;

use crate::error::Result;

/// Supplies the mapping entries of a named mapping system.
///
/// Implementations return only the entries whose `SourceListName` equals
/// `system`; an unknown system yields an empty table, not an error.
pub trait MappingProvider {
    fn load(&self, system: &str) -> Result<Vec<MappingEntry>>;
}

/// In-memory mapping table.
impl MappingProvider for [MappingEntry] {
    fn load(&self, system: &str) -> Result<Vec<MappingEntry>> {
        Ok(self
            .iter()
            .filter(|entry| entry.source_list == system)
            .cloned()
            .collect())
    }
}

impl MappingProvider for Vec<MappingEntry> {
    fn load(&self, system: &str) -> Result<Vec<MappingEntry>> {
        self.as_slice().load(system)
    }
}

/// Distinct mapping systems present in a mapping table, sorted.
pub fn supported_mapping_systems(entries: &[MappingEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.source_list.trim())
        .filter(|system| !system.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
