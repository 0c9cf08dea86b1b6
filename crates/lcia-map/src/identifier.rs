//! Deterministic flow identifiers.

use uuid::Uuid;

/// Generates a name-based (v3, OID namespace) UUID from the given parts.
///
/// Parts are trimmed, lowercased and joined with `/`, so the same flow
/// description always produces the same identifier.
pub fn make_uuid(parts: &[&str]) -> String {
    let path = parts
        .iter()
        .map(|part| part.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("/");
    Uuid::new_v3(&Uuid::NAMESPACE_OID, path.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_and_case_insensitive() {
        let a = make_uuid(&["Carbon dioxide", "air", "kg"]);
        let b = make_uuid(&[" carbon DIOXIDE", "AIR ", "kg"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 36);
        assert_ne!(a, make_uuid(&["Carbon dioxide", "water", "kg"]));
    }
}
