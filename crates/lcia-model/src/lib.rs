pub mod error;
pub mod mapping;
pub mod method;
pub mod options;
pub mod record;

pub use error::{LciaError, Result};
pub use mapping::{MappingEntry, mapping_columns};
pub use method::{Method, MethodMetadata, supported_methods};
pub use options::{MappingOptions, UnspecifiedContext};
pub use record::{CharacterizationRow, columns};
