//! Flow lookup keys.

use crate::category::CategoryNormalizer;

/// Unit assumed for flows that do not state one.
pub const DEFAULT_UNIT: &str = "kg";

/// Builds the lookup key of a flow.
///
/// A non-blank identifier is authoritative and used verbatim. Without one, the
/// key is `name/context/unit`, trimmed and lowercased, with the context
/// canonicalized and the unit defaulting to `kg`. Mapping entries and table
/// rows must go through the same builder.
///
/// Composite keys always fold case, so `Carbon dioxide` and `carbon dioxide`
/// share a key whatever the mapping's case setting. Identifiers are compared
/// verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowKeyBuilder {
    normalizer: CategoryNormalizer,
}

impl FlowKeyBuilder {
    pub fn new(normalizer: CategoryNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &CategoryNormalizer {
        &self.normalizer
    }

    pub fn key(&self, identifier: &str, name: &str, context: &str, unit: &str) -> String {
        if !identifier.trim().is_empty() {
            return identifier.to_string();
        }
        let mut parts = vec![name.to_string()];
        if !context.trim().is_empty() {
            parts.push(self.normalizer.normalize(Some(context)));
        }
        parts.push(if unit.trim().is_empty() {
            DEFAULT_UNIT.to_string()
        } else {
            unit.to_string()
        });
        parts
            .iter()
            .map(|part| part.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Builds a flow key with the default normalizer.
pub fn flow_key(identifier: &str, name: &str, context: &str, unit: &str) -> String {
    FlowKeyBuilder::default().key(identifier, name, context, unit)
}

#[cfg(test)]
mod tests {
    use lcia_model::UnspecifiedContext;

    use super::*;

    #[test]
    fn identifier_wins() {
        assert_eq!(
            flow_key("b6f010fb-a764-3063-af2d-bcb8309a97b7", "Methane", "air", "kg"),
            "b6f010fb-a764-3063-af2d-bcb8309a97b7"
        );
    }

    #[test]
    fn composite_key_is_normalized() {
        assert_eq!(
            flow_key("", " Carbon Dioxide ", "Emission to air/urban air", "KG"),
            "carbon dioxide/air/urban/kg"
        );
    }

    #[test]
    fn missing_context_and_unit() {
        assert_eq!(flow_key("  ", "Lead", "", ""), "lead/kg");
        assert_eq!(flow_key("", "Lead", "Elementary flows", "kg"), "lead//kg");
    }

    #[test]
    fn composite_keys_fold_case() {
        assert_eq!(
            flow_key("", "CARBON DIOXIDE", "Air", "kg"),
            flow_key("", "carbon dioxide", "air", "KG")
        );
        assert_eq!(flow_key("ABC-id", "x", "", ""), "ABC-id");
    }

    #[test]
    fn normalizer_configuration_is_applied() {
        let builder = FlowKeyBuilder::new(CategoryNormalizer::new(UnspecifiedContext::Drop));
        assert_eq!(builder.key("", "Lead", "air/unspecified", "kg"), "lead/air/kg");
        assert_eq!(flow_key("", "Lead", "air/unspecified", "kg"), "lead/air/unspecified/kg");
    }
}
