//! Compartment (context) path canonicalization.
//!
//! Publishers spell the same compartment in many ways:
//! `Elementary flows/Emission to air/high population density` and `air/urban`
//! describe the same release pathway. The normalizer reduces such paths to a
//! lowercase, slash-joined form so that flow keys built from different naming
//! conventions collide.
//!
//! The exact same normalizer configuration must be used when indexing mapping
//! entries and when looking up table rows, otherwise nothing ever matches.

use lcia_model::UnspecifiedContext;

/// Segment that only marks the root of a flow hierarchy.
const ROOT_SEGMENT: &str = "elementary flows";
const UNSPECIFIED_SEGMENT: &str = "unspecified";

const EMISSION_PREFIX: &str = "emission to ";
const SHORT_PREFIXES: [&str; 2] = ["in ", "to "];

const SYNONYMS: [(&str, &str); 2] = [
    ("high population density", "urban"),
    ("low population density", "rural"),
];

/// Canonicalizes compartment paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryNormalizer {
    unspecified: UnspecifiedContext,
}

impl CategoryNormalizer {
    pub fn new(unspecified: UnspecifiedContext) -> Self {
        Self { unspecified }
    }

    pub fn unspecified(&self) -> UnspecifiedContext {
        self.unspecified
    }

    /// Normalizes a category path; `None` yields the empty string.
    ///
    /// ```
    /// use lcia_map::CategoryNormalizer;
    ///
    /// let normalizer = CategoryNormalizer::default();
    /// assert_eq!(
    ///     normalizer.normalize(Some("Emission to water/ground water")),
    ///     "water/ground"
    /// );
    /// assert_eq!(normalizer.normalize(None), "");
    /// ```
    pub fn normalize(&self, path: Option<&str>) -> String {
        let Some(path) = path else {
            return String::new();
        };
        // A rewrite can expose another one (a promoted qualifier becomes a
        // head term), so passes repeat until the path is stable. Every pass
        // after the first only removes text.
        let mut current = self.single_pass(path);
        loop {
            let next = self.single_pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn single_pass(&self, path: &str) -> String {
        let mut emitted: Vec<String> = Vec::new();
        for raw in path.split('/') {
            let part = trim_segment(raw).to_lowercase();
            if self.is_ignored(&part) {
                continue;
            }

            let (head, qualifiers) = split_qualifiers(&part);
            let mut term = canonical_term(head);

            if let Some(previous) = emitted.last() {
                if *previous == term {
                    let clause = qualifiers.join(", ");
                    if !clause.is_empty() && clause != *previous {
                        emitted.push(clause);
                    }
                    continue;
                }
                while !term.is_empty() && term.ends_with(previous.as_str()) {
                    let stem = &term[..term.len() - previous.len()];
                    term = stem.trim_matches([' ', '-']).to_string();
                }
            }

            if !qualifiers.is_empty() {
                if term.is_empty() {
                    term = qualifiers.join(", ");
                } else {
                    term = format!("{term}, {}", qualifiers.join(", "));
                }
            }
            if term.is_empty() {
                continue;
            }
            emitted.push(term);
        }
        emitted.join("/")
    }

    fn is_ignored(&self, part: &str) -> bool {
        part.is_empty()
            || part == ROOT_SEGMENT
            || (self.unspecified == UnspecifiedContext::Drop && part == UNSPECIFIED_SEGMENT)
    }
}

/// Normalizes a category path with the default configuration.
pub fn normalize_category(path: Option<&str>) -> String {
    CategoryNormalizer::default().normalize(path)
}

fn trim_segment(raw: &str) -> &str {
    raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '-')
}

/// Splits `term, qualifier, qualifier` into the head term and its non-empty
/// qualifier clauses.
fn split_qualifiers(part: &str) -> (&str, Vec<&str>) {
    let mut pieces = part.split(',').map(str::trim);
    let head = pieces.next().unwrap_or_default();
    let qualifiers = pieces.filter(|piece| !piece.is_empty()).collect();
    (head, qualifiers)
}

fn canonical_term(head: &str) -> String {
    let mut term = head;
    if let Some(rest) = term.strip_prefix(EMISSION_PREFIX) {
        term = rest.trim();
    }
    for prefix in SHORT_PREFIXES {
        if let Some(rest) = term.strip_prefix(prefix) {
            term = rest.trim();
            break;
        }
    }
    for (from, to) in SYNONYMS {
        if term == from {
            return to.to_string();
        }
    }
    term.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(path: &str) -> String {
        normalize_category(Some(path))
    }

    #[test]
    fn strips_root_and_emission_prefix() {
        assert_eq!(
            norm("Elementary flows/Emission to air/high population density, long-term"),
            "air/urban, long-term"
        );
        assert_eq!(norm("Elementary flows / Emission to water"), "water");
    }

    #[test]
    fn strips_repeated_suffix_of_parent() {
        assert_eq!(norm("Emission to water/ground water"), "water/ground");
        assert_eq!(norm("Emission to water / fossil-water"), "water/fossil");
        assert_eq!(norm("Emission to water / water"), "water");
    }

    #[test]
    fn repeated_term_with_qualifier_emits_qualifier_only() {
        assert_eq!(norm("Emission to air/air, long-term"), "air/long-term");
    }

    #[test]
    fn short_prefixes_and_synonyms() {
        assert_eq!(norm("Resource/in ground"), "resource/ground");
        assert_eq!(norm("to air/low population density"), "air/rural");
    }

    #[test]
    fn unspecified_policy() {
        let keep = CategoryNormalizer::new(UnspecifiedContext::Keep);
        let drop = CategoryNormalizer::new(UnspecifiedContext::Drop);
        let path = Some("Elementary flows / Emission to air / unspecified");
        assert_eq!(keep.normalize(path), "air/unspecified");
        assert_eq!(drop.normalize(path), "air");
    }

    #[test]
    fn fully_filtered_path_is_empty() {
        assert_eq!(norm("Elementary flows"), "");
        assert_eq!(norm(""), "");
        assert_eq!(norm(" / - /"), "");
        assert_eq!(normalize_category(None), "");
    }

    #[test]
    fn qualifier_repeating_the_parent_is_dropped() {
        assert_eq!(norm("air/air, air"), "air");
        assert_eq!(norm("a/baa"), "a/b");
        assert_eq!(norm("water/water, in ground"), "water/ground");
    }

    #[test]
    fn blank_qualifiers_are_dropped() {
        assert_eq!(norm("air/urban,"), "air/urban");
        assert_eq!(norm("air/air,"), "air");
    }
}
