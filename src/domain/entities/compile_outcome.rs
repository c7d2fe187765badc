//! Compile outcome entities
//!
//! The engine returns a tagged outcome instead of failing, so the runner can
//! pattern-match on per-file failures and keep going.

use std::fmt;
use std::path::{Path, PathBuf};

/// Compiled CSS produced by the engine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Artifact {
    css: String,
}

impl Artifact {
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// Rendered CSS
    pub fn css(&self) -> &str {
        &self.css
    }
}

/// A structured syntax error reported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Engine message, without location
    pub message: String,
    /// File the error was reported against
    pub file: PathBuf,
    /// 1-indexed line, when the engine knows it
    pub line: Option<usize>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Render the error, naming its own file or `fallback` when it has none
    ///
    /// The line field is rendered blank rather than omitted when unknown.
    pub fn render_for(&self, fallback: &Path) -> String {
        let line = self.line.map(|l| l.to_string()).unwrap_or_default();
        let file: &Path = if self.file.as_os_str().is_empty() {
            fallback
        } else {
            &self.file
        };
        format!(
            "Error: {}\n        on line {} of {}",
            self.message,
            line,
            file.display()
        )
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_for(&self.file))
    }
}

impl std::error::Error for SyntaxError {}

/// Result of compiling one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Success(Artifact),
    SyntaxFailure(SyntaxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_line_is_rendered_blank() {
        let err = SyntaxError::new("Err", "a.sass");
        assert_eq!(err.to_string(), "Error: Err\n        on line  of a.sass");
    }

    #[test]
    fn known_line_is_rendered() {
        let err = SyntaxError::new("Invalid CSS after \"a\"", "b.scss").with_line(12);
        assert!(err.to_string().ends_with("on line 12 of b.scss"));
    }

    #[test]
    fn render_for_prefers_the_error_file() {
        let err = SyntaxError::new("bad", "_p.sass").with_line(2);
        assert_eq!(
            err.render_for(Path::new("site.scss")),
            "Error: bad\n        on line 2 of _p.sass"
        );
    }

    #[test]
    fn render_for_falls_back_when_error_has_no_file() {
        let err = SyntaxError::new("bad", "");
        assert_eq!(
            err.render_for(Path::new("_q.scss")),
            "Error: bad\n        on line  of _q.scss"
        );
    }
}
