//! Subsetting a method table by indicator or method version.

use lcia_model::CharacterizationRow;
use tracing::error;

/// Keeps rows whose indicator is one of `indicators`.
pub fn filter_indicators<S: AsRef<str>>(
    rows: Vec<CharacterizationRow>,
    indicators: &[S],
) -> Vec<CharacterizationRow> {
    let kept = retain_named(rows, indicators, |row| &row.indicator);
    if kept.is_empty() {
        error!("indicator not found");
    }
    kept
}

/// Keeps rows whose method name is one of `methods`; used to pick versions of
/// methods published in several editions.
pub fn filter_methods<S: AsRef<str>>(
    rows: Vec<CharacterizationRow>,
    methods: &[S],
) -> Vec<CharacterizationRow> {
    let kept = retain_named(rows, methods, |row| &row.method);
    if kept.is_empty() {
        error!("specified method not found");
    }
    kept
}

fn retain_named<S, F>(
    mut rows: Vec<CharacterizationRow>,
    names: &[S],
    field: F,
) -> Vec<CharacterizationRow>
where
    S: AsRef<str>,
    F: Fn(&CharacterizationRow) -> &String,
{
    rows.retain(|row| names.iter().any(|name| name.as_ref() == field(row).as_str()));
    rows
}
