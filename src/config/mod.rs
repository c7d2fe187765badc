//! Configuration module for sass-guard
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SASS_GUARD_*)
//! 3. Project config (./sass-guard.toml)
//! 4. User config (<config dir>/sass-guard/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{with_overrides_from, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, CompileConfig, Config, OutputConfig, UiConfig, WatchConfig};
