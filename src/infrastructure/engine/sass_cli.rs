//! Sass command-line engine
//!
//! Compiles through an external `sass` executable (Dart Sass) and resolves
//! import closures by scanning sources directly, so owner lookup never has
//! to spawn a process.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::imports::import_closure;
use crate::domain::entities::{Artifact, CompileOutcome, SyntaxError};
use crate::domain::ports::CompileEngine;
use crate::domain::value_objects::{EngineOptions, OutputStyle};

/// Executable used when none is configured
pub const DEFAULT_EXECUTABLE: &str = "sass";

/// Engine backed by the `sass` executable
#[derive(Debug, Clone)]
pub struct SassCliEngine {
    executable: PathBuf,
}

impl Default for SassCliEngine {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl SassCliEngine {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn command(&self, path: &Path, options: &EngineOptions) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.arg(style_flag(options.style));
        // Dart Sass has no line comments; an inline source map is the nearest
        // debugging aid it offers when writing to stdout.
        if options.debug_info || options.line_numbers {
            cmd.arg("--embed-source-map");
        } else {
            cmd.arg("--no-source-map");
        }
        for load_path in &options.load_paths {
            cmd.arg(format!("--load-path={}", load_path.display()));
        }
        cmd.arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl CompileEngine for SassCliEngine {
    fn compile(&self, path: &Path, options: &EngineOptions) -> CompileOutcome {
        let output = match self.command(path, options).output() {
            Ok(output) => output,
            Err(e) => {
                return CompileOutcome::SyntaxFailure(SyntaxError::new(
                    format!("could not run {}: {}", self.executable.display(), e),
                    path,
                ))
            }
        };

        if output.status.success() {
            let css = String::from_utf8_lossy(&output.stdout).into_owned();
            return CompileOutcome::Success(Artifact::new(css));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut error = parse_error(&stderr, path);
        if error.message.is_empty() {
            error.message = match output.status.code() {
                Some(code) => format!("{} exited with status {}", self.executable.display(), code),
                None => format!("{} was terminated by a signal", self.executable.display()),
            };
        }
        CompileOutcome::SyntaxFailure(error)
    }

    fn resolve_dependencies(
        &self,
        path: &Path,
        options: &EngineOptions,
    ) -> Result<Vec<PathBuf>, SyntaxError> {
        import_closure(path, &options.load_paths)
    }
}

/// Dart Sass only distinguishes expanded and compressed output
fn style_flag(style: OutputStyle) -> &'static str {
    if style.is_minified() {
        "--style=compressed"
    } else {
        "--style=expanded"
    }
}

/// Turn Dart Sass stderr into a `SyntaxError`
///
/// The message is the text after `Error: `. The location is the first
/// `<file> <line>:<column>` trace line. Without a trace line the error is
/// attributed to `path` with no line.
pub fn parse_error(stderr: &str, path: &Path) -> SyntaxError {
    let message = stderr
        .lines()
        .find_map(|l| l.trim_start().strip_prefix("Error: "))
        .or_else(|| stderr.lines().map(str::trim).find(|l| !l.is_empty()))
        .unwrap_or_default()
        .trim()
        .to_string();

    match stderr.lines().find_map(trace_location) {
        Some((file, line)) => SyntaxError::new(message, file).with_line(line),
        None => SyntaxError::new(message, path),
    }
}

fn trace_location(line: &str) -> Option<(PathBuf, usize)> {
    let mut parts = line.split_whitespace();
    let file = parts.next()?;
    let (row, column) = parts.next()?.split_once(':')?;
    column.parse::<usize>().ok()?;
    let row = row.parse::<usize>().ok()?;
    Some((PathBuf::from(file), row))
}
