#![deny(unsafe_code)]

pub mod cas;
pub mod error;
pub mod mapping_csv;
pub mod method_csv;
pub mod source;

pub use cas::format_cas;
pub use error::{IngestError, Result};
pub use mapping_csv::{CsvMappingProvider, read_mapping_csv};
pub use method_csv::{read_method_csv, write_method_csv};
pub use source::{CanonicalCsvSource, MethodSource};
