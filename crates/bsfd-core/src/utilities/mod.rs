//! Miscellaneous utilities.

pub mod data_parsers;

pub use data_parsers::{parse_count, parse_real};
