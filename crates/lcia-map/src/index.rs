//! In-memory index from source flow keys to target flows.

use std::collections::HashMap;

use lcia_model::MappingEntry;
use tracing::info;

use crate::error::{MapError, Result};
use crate::identifier::make_uuid;
use crate::key::{DEFAULT_UNIT, FlowKeyBuilder};

/// Target side of a mapping entry, ready to be written into a row.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetFlow {
    pub id: String,
    pub name: String,
    pub context: String,
    pub unit: String,
    /// Amount of target flow per unit of source flow.
    pub conversion_factor: f64,
}

impl TargetFlow {
    /// Builds the target of `entry`, generating a stable identifier when the
    /// entry carries none.
    fn from_entry(entry: &MappingEntry, key: &str) -> Result<Self> {
        let conversion_factor = entry.conversion_factor.unwrap_or(1.0);
        if !conversion_factor.is_finite() || conversion_factor == 0.0 {
            return Err(MapError::InvalidConversionFactor {
                key: key.to_string(),
                value: conversion_factor,
            });
        }
        let unit = if entry.target_unit.trim().is_empty() {
            DEFAULT_UNIT.to_string()
        } else {
            entry.target_unit.clone()
        };
        let id = if entry.target_id.trim().is_empty() {
            make_uuid(&[&entry.target_name, &entry.target_context, &unit])
        } else {
            entry.target_id.clone()
        };
        Ok(Self {
            id,
            name: entry.target_name.clone(),
            context: entry.target_context.clone(),
            unit,
            conversion_factor,
        })
    }

    /// Converts a factor expressed per unit of source flow.
    pub fn convert(&self, factor: f64) -> f64 {
        factor / self.conversion_factor
    }
}

/// Multi-map from source flow key to every target flow it maps onto.
#[derive(Debug, Clone, Default)]
pub struct MappingIndex {
    targets: HashMap<String, Vec<TargetFlow>>,
    entries: usize,
}

impl MappingIndex {
    /// Indexes `entries`, keeping only those of `system` when one is given.
    ///
    /// Entries sharing a source key are all kept, in table order.
    pub fn build(
        entries: &[MappingEntry],
        system: Option<&str>,
        keys: &FlowKeyBuilder,
    ) -> Result<Self> {
        let mut index = Self::default();
        let mut scanned = 0usize;
        for entry in entries {
            scanned += 1;
            if let Some(system) = system
                && entry.source_list != system
            {
                continue;
            }
            let key = keys.key(
                &entry.source_id,
                &entry.source_name,
                &entry.source_context,
                &entry.source_unit,
            );
            let target = TargetFlow::from_entry(entry, &key)?;
            index.targets.entry(key).or_default().push(target);
            index.entries += 1;
        }
        info!(
            system = system.unwrap_or("*"),
            scanned,
            indexed = index.entries,
            keys = index.targets.len(),
            "indexed flow mapping"
        );
        Ok(index)
    }

    pub fn get(&self, key: &str) -> Option<&[TargetFlow]> {
        self.targets.get(key).map(Vec::as_slice)
    }

    /// Number of distinct source keys.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of indexed entries, counting every fan-out target.
    pub fn entry_count(&self) -> usize {
        self.entries
    }
}
