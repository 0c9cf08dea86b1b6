//! Error types for flow mapping.

use thiserror::Error;

/// Errors raised while indexing or applying a flow mapping.
#[derive(Debug, Error)]
pub enum MapError {
    /// A conversion factor that would corrupt every factor derived from it.
    #[error("invalid conversion factor {value} for source flow {key}")]
    InvalidConversionFactor { key: String, value: f64 },

    /// The mapping provider could not supply a table for the system.
    #[error("failed to load flow mapping for {system}")]
    Provider {
        system: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MapError {
    pub fn provider(
        system: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Provider {
            system: system.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
