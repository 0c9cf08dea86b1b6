//! Configuration options for flow mapping.

use serde::{Deserialize, Serialize};

/// How a literal `unspecified` compartment segment is treated when
/// canonicalizing context paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnspecifiedContext {
    /// Keep `unspecified` as an ordinary segment (`air/unspecified`).
    #[default]
    Keep,
    /// Drop it like `elementary flows`, so `air/unspecified` matches `air`.
    Drop,
}

/// Options controlling a single flow mapping run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingOptions {
    /// Mapping system (`SourceListName`) to select from the mapping table.
    /// `None` accepts every entry of an explicitly supplied table.
    pub system: Option<String>,

    /// Keep rows whose flow has no mapping instead of dropping them.
    pub preserve_unmapped: bool,

    /// Report source flow names in lowercase. Flow keys fold case either way.
    pub case_insensitive: bool,

    /// Treatment of `unspecified` context segments.
    pub unspecified: UnspecifiedContext,
}

impl MappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_preserve_unmapped(mut self, enable: bool) -> Self {
        self.preserve_unmapped = enable;
        self
    }

    pub fn with_case_insensitive(mut self, enable: bool) -> Self {
        self.case_insensitive = enable;
        self
    }

    pub fn with_unspecified(mut self, unspecified: UnspecifiedContext) -> Self {
        self.unspecified = unspecified;
        self
    }
}
