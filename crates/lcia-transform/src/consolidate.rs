//! Consolidation of redundant characterization factors.

use std::collections::BTreeMap;

use lcia_model::{CharacterizationRow, columns};
use tracing::info;

struct Group {
    row: CharacterizationRow,
    total: f64,
    count: usize,
}

/// Collapses rows that differ only in characterization factor or CAS number.
///
/// Rows are grouped on every other column; each group becomes one row carrying
/// the mean factor and the first non-empty CAS number. Target flow lists are
/// sometimes coarser than source lists, so several source flows can land on
/// the same target flow after mapping and this is where they are reconciled.
/// Output is ordered by the grouping columns.
pub fn collapse_indicators(rows: &[CharacterizationRow]) -> Vec<CharacterizationRow> {
    let mut groups: BTreeMap<Vec<&str>, Group> = BTreeMap::new();
    for row in rows {
        let key = group_key(row);
        match groups.get_mut(&key) {
            Some(group) => {
                group.total += row.characterization_factor;
                group.count += 1;
                if group.row.cas_number.is_empty() && !row.cas_number.is_empty() {
                    group.row.cas_number = row.cas_number.clone();
                }
            }
            None => {
                groups.insert(
                    key,
                    Group {
                        row: row.clone(),
                        total: row.characterization_factor,
                        count: 1,
                    },
                );
            }
        }
    }

    let duplicated: Vec<usize> = groups
        .values()
        .filter(|group| group.count > 1)
        .map(|group| group.count)
        .collect();
    info!(
        duplicates = duplicated.iter().sum::<usize>(),
        consolidated = duplicated.len(),
        "consolidated duplicate factors"
    );

    groups
        .into_values()
        .map(|group| {
            let mut row = group.row;
            row.characterization_factor = group.total / group.count as f64;
            row
        })
        .collect()
}

fn group_key(row: &CharacterizationRow) -> Vec<&str> {
    columns::ALL
        .iter()
        .filter(|column| **column != columns::CAS_NO)
        .filter_map(|column| row.text(column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(flowable: &str, cas: &str, factor: f64) -> CharacterizationRow {
        CharacterizationRow {
            method: "ReCiPe 2016".to_string(),
            indicator: "Ozone depletion".to_string(),
            flowable: flowable.to_string(),
            flow_id: format!("{flowable}-id"),
            context: "air".to_string(),
            unit: "kg".to_string(),
            cas_number: cas.to_string(),
            characterization_factor: factor,
            ..Default::default()
        }
    }

    #[test]
    fn averages_identical_flows() {
        let collapsed = collapse_indicators(&[
            row("Halon 1211", "", 3.0),
            row("Halon 1211", "353-59-3", 5.0),
        ]);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed[0].characterization_factor, 4.0);
        assert_eq!(collapsed[0].cas_number, "353-59-3");
    }

    #[test]
    fn distinct_flows_are_kept_in_key_order() {
        let collapsed = collapse_indicators(&[
            row("Methyl bromide", "74-83-9", 0.7),
            row("Halon 1301", "75-63-8", 15.8),
        ]);
        let flowables: Vec<_> = collapsed.iter().map(|r| r.flowable.as_str()).collect();
        assert_eq!(flowables, vec!["Halon 1301", "Methyl bromide"]);
    }
}
