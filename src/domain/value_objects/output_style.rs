//! Output style value object - how the engine formats generated CSS

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SassGuardError;

/// CSS output style requested from the engine
///
/// `Nested` and `Compact` are kept for configuration compatibility; engines
/// that only know two styles map them onto the closest one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Nested,
    Expanded,
    Compact,
    Compressed,
}

impl OutputStyle {
    /// Name as written in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Nested => "nested",
            OutputStyle::Expanded => "expanded",
            OutputStyle::Compact => "compact",
            OutputStyle::Compressed => "compressed",
        }
    }

    /// Whether whitespace should be stripped from the output
    pub fn is_minified(&self) -> bool {
        matches!(self, OutputStyle::Compressed)
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputStyle {
    type Err = SassGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nested" => Ok(OutputStyle::Nested),
            "expanded" => Ok(OutputStyle::Expanded),
            "compact" => Ok(OutputStyle::Compact),
            "compressed" => Ok(OutputStyle::Compressed),
            other => Err(SassGuardError::UnknownStyle(other.to_string())),
        }
    }
}
