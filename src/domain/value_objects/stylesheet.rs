//! Stylesheet classification helpers
//!
//! A partial is a file whose name starts with `_`. Partials are only ever
//! imported, so they never get an output of their own.

use std::path::Path;

/// Source extensions recognised as stylesheets
pub const STYLESHEET_EXTENSIONS: [&str; 2] = ["scss", "sass"];

/// Returns true if the path has a `.scss` or `.sass` extension
pub fn is_stylesheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| STYLESHEET_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Returns true if the file name starts with an underscore
pub fn is_partial(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('_'))
        .unwrap_or(false)
}
