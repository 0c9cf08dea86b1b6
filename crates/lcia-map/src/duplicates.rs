//! Detection of redundant characterization factors.

use std::collections::{BTreeMap, BTreeSet};

use lcia_model::CharacterizationRow;

/// A (method, indicator, flowable) combination carrying more than one factor
/// for the same flow and location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DuplicateFactor {
    pub method: String,
    pub indicator: String,
    pub flowable: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    /// Affected combinations, sorted.
    pub combinations: Vec<DuplicateFactor>,
    /// Rows belonging to a duplicated group.
    pub factor_count: usize,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// Groups rows by (Method, Indicator, Flowable, Flow UUID, Location) and
/// reports every group holding more than one row.
pub fn find_duplicate_factors(rows: &[CharacterizationRow]) -> DuplicateReport {
    let mut groups: BTreeMap<(&str, &str, &str, &str, &str), usize> = BTreeMap::new();
    for row in rows {
        let key = (
            row.method.as_str(),
            row.indicator.as_str(),
            row.flowable.as_str(),
            row.flow_id.as_str(),
            row.location.as_str(),
        );
        *groups.entry(key).or_default() += 1;
    }

    let mut combinations = BTreeSet::new();
    let mut factor_count = 0;
    for ((method, indicator, flowable, _, _), count) in groups {
        if count < 2 {
            continue;
        }
        factor_count += count;
        combinations.insert(DuplicateFactor {
            method: method.to_string(),
            indicator: indicator.to_string(),
            flowable: flowable.to_string(),
        });
    }
    DuplicateReport {
        combinations: combinations.into_iter().collect(),
        factor_count,
    }
}
