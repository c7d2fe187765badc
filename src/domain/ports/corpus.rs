//! Corpus port - lists every stylesheet a partial could be imported from

use std::path::PathBuf;

use crate::error::SassGuardResult;

/// Source of the full stylesheet corpus
pub trait Corpus {
    /// All stylesheets, partials included, in a stable order
    fn stylesheets(&self) -> SassGuardResult<Vec<PathBuf>>;
}

impl<C: Corpus + ?Sized> Corpus for &C {
    fn stylesheets(&self) -> SassGuardResult<Vec<PathBuf>> {
        (**self).stylesheets()
    }
}

/// Fixed, in-memory corpus
impl Corpus for Vec<PathBuf> {
    fn stylesheets(&self) -> SassGuardResult<Vec<PathBuf>> {
        Ok(self.clone())
    }
}
