#![deny(unsafe_code)]

//! Flow-mapping engine.
//!
//! Rows of a characterization-factor table are keyed by [`FlowKeyBuilder`],
//! looked up in a [`MappingIndex`] built from a flow-correspondence table and
//! rewritten by the [`Mapper`] into the target flow system.

pub mod category;
pub mod duplicates;
pub mod engine;
pub mod error;
pub mod identifier;
pub mod index;
pub mod key;
pub mod provider;

pub use category::{CategoryNormalizer, normalize_category};
pub use duplicates::{DuplicateFactor, DuplicateReport, find_duplicate_factors};
pub use engine::{Mapper, MappingOutcome, MappingStats};
pub use error::{MapError, Result};
pub use identifier::make_uuid;
pub use index::{MappingIndex, TargetFlow};
pub use key::{DEFAULT_UNIT, FlowKeyBuilder, flow_key};
pub use provider::{MappingProvider, supported_mapping_systems};
