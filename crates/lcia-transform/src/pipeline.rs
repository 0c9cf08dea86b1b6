//! Mapped-method generation.

use lcia_map::{Mapper, MappingOutcome, MappingProvider, MappingStats};
use lcia_model::{CharacterizationRow, MappingOptions, Method};
use tracing::info;

use crate::consolidate::collapse_indicators;
use crate::error::Result;

/// Maps a supported method onto its target flow list and consolidates the
/// result.
///
/// The mapping system and case sensitivity come from the method's metadata
/// unless `options` already sets them. A method without a mapping system is
/// returned unchanged.
pub fn map_method<P>(
    mut rows: Vec<CharacterizationRow>,
    method: Method,
    mut options: MappingOptions,
    provider: &P,
) -> Result<MappingOutcome>
where
    P: MappingProvider + ?Sized,
{
    let metadata = method.metadata()?;
    if options.system.is_none() {
        options.system = metadata.mapping.clone();
    }
    options.case_insensitive |= metadata.case_insensitivity;

    let Some(system) = options.system.clone() else {
        info!(method = %method, "method has no flow mapping; keeping source flows");
        let stats = MappingStats {
            input_rows: rows.len(),
            preserved: rows.len(),
            ..Default::default()
        };
        return Ok(MappingOutcome { rows, stats });
    };

    if options.case_insensitive {
        lowercase_flowables(&mut rows);
    }

    info!(method = %method, system = %system, "mapping method flows");
    let mut outcome = Mapper::new(options).with_provider(provider)?.run(&rows)?;
    if outcome.stats.applied {
        outcome.rows = collapse_indicators(&outcome.rows);
    }
    Ok(outcome)
}

/// Lowercases the `Flowable` of every row, as case-insensitive methods are
/// published.
pub fn lowercase_flowables(rows: &mut [CharacterizationRow]) {
    for row in rows {
        row.flowable = row.flowable.to_lowercase();
    }
}
