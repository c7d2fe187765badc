//! CompileEngine port - the stylesheet compiler as an opaque service
//!
//! Implementations:
//! - `SassCliEngine` - shells out to the `sass` executable
//! - test fakes returning canned outcomes

use std::path::{Path, PathBuf};

use crate::domain::entities::{CompileOutcome, SyntaxError};
use crate::domain::value_objects::EngineOptions;

/// A stylesheet compiler
pub trait CompileEngine {
    /// Compile one file to CSS
    fn compile(&self, path: &Path, options: &EngineOptions) -> CompileOutcome;

    /// Every file `path` imports, directly or transitively
    ///
    /// Must return the full import closure. `path` itself is not included.
    fn resolve_dependencies(
        &self,
        path: &Path,
        options: &EngineOptions,
    ) -> Result<Vec<PathBuf>, SyntaxError>;
}

impl<E: CompileEngine + ?Sized> CompileEngine for &E {
    fn compile(&self, path: &Path, options: &EngineOptions) -> CompileOutcome {
        (**self).compile(path, options)
    }

    fn resolve_dependencies(
        &self,
        path: &Path,
        options: &EngineOptions,
    ) -> Result<Vec<PathBuf>, SyntaxError> {
        (**self).resolve_dependencies(path, options)
    }
}

impl<E: CompileEngine + ?Sized> CompileEngine for Box<E> {
    fn compile(&self, path: &Path, options: &EngineOptions) -> CompileOutcome {
        (**self).compile(path, options)
    }

    fn resolve_dependencies(
        &self,
        path: &Path,
        options: &EngineOptions,
    ) -> Result<Vec<PathBuf>, SyntaxError> {
        (**self).resolve_dependencies(path, options)
    }
}
