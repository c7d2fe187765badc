//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compile_options;
mod config_warning;
mod output_style;
pub mod stylesheet;

pub use compile_options::{CompileOptions, EngineOptions};
pub use config_warning::ConfigWarning;
pub use output_style::OutputStyle;
pub use stylesheet::{is_partial, is_stylesheet};
