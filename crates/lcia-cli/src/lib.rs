//! Library components of the `lcia` command-line tool.

pub mod logging;
pub mod pipeline;
