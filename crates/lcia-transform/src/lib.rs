#![deny(unsafe_code)]

pub mod consolidate;
pub mod error;
pub mod filter;
pub mod frame;
pub mod pipeline;

pub use consolidate::collapse_indicators;
pub use error::{Result, TransformError};
pub use filter::{filter_indicators, filter_methods};
pub use frame::{frame_to_rows, rows_to_frame};
pub use pipeline::{lowercase_flowables, map_method};
