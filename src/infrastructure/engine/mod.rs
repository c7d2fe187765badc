//! Compile engine adapters

pub mod imports;
mod sass_cli;

pub use sass_cli::{parse_error, SassCliEngine, DEFAULT_EXECUTABLE};
