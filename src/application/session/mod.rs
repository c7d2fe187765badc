//! Session
//!
//! The plugin-level flow around the runner: what to compile on start, how a
//! batch of changed paths expands to include the owners of changed partials,
//! and how removed sources drop their outputs.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::entities::RunReport;
use crate::domain::ports::{CompileEngine, Corpus, FileSystem, Notification, Reporter};
use crate::domain::services::{map_output_path, normalize, relative_to};
use crate::domain::value_objects::{is_partial, is_stylesheet};
use crate::error::SassGuardResult;

use super::runner::{Runner, MESSAGE_PREFIX};


/// Session over a runner and the corpus it resolves owners against
pub struct Session<E, FS, R, C>
where
    E: CompileEngine,
    FS: FileSystem,
    R: Reporter,
    C: Corpus,
{
    runner: Runner<E, FS, R>,
    corpus: C,
    base_dir: Option<PathBuf>,
}

impl<E, FS, R, C> Session<E, FS, R, C>
where
    E: CompileEngine,
    FS: FileSystem,
    R: Reporter,
    C: Corpus,
{
    /// Create a new session
    pub fn new(runner: Runner<E, FS, R>, corpus: C) -> Self {
        Self {
            runner,
            corpus,
            base_dir: None,
        }
    }

    /// Treat absolute paths under `dir` as relative to it
    ///
    /// Changed, removed and discovered paths all pass through this, so an
    /// editor handing over `/proj/sass/_p.scss` matches the corpus entry
    /// `sass/_p.scss`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn runner(&self) -> &Runner<E, FS, R> {
        &self.runner
    }

    /// Compile everything if `all_on_start` is set
    pub fn start(&self) -> SassGuardResult<Option<RunReport>> {
        if self.runner.options().all_on_start {
            self.run_all().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Compile every non-partial stylesheet in the corpus
    pub fn run_all(&self) -> SassGuardResult<RunReport> {
        let targets: Vec<PathBuf> = self
            .localize(&self.corpus.stylesheets()?)
            .into_iter()
            .filter(|p| !is_partial(p))
            .collect();
        Ok(self.runner.run(&dedup(targets)))
    }

    /// Files that would be recompiled for `partials`
    pub fn owners(&self, partials: &[PathBuf]) -> SassGuardResult<Vec<PathBuf>> {
        if partials.is_empty() {
            return Ok(Vec::new());
        }
        let corpus = self.localize(&self.corpus.stylesheets()?);
        Ok(self.runner.owners(&corpus, &self.localize(partials)))
    }

    /// Compile changed stylesheets plus the owners of any changed partials
    ///
    /// Partials themselves never get an output. Non-stylesheet paths are
    /// ignored.
    pub fn run_on_changes(&self, changed: &[PathBuf]) -> SassGuardResult<RunReport> {
        let (partials, mut targets): (Vec<PathBuf>, Vec<PathBuf>) = self
            .localize(changed)
            .into_iter()
            .filter(|p| is_stylesheet(p))
            .partition(|p| is_partial(p));

        targets.extend(
            self.owners(&partials)?
                .into_iter()
                .filter(|p| !is_partial(p)),
        );

        Ok(self.runner.run(&dedup(targets)))
    }

    /// Delete the outputs of removed stylesheets
    ///
    /// The report lists the outputs actually removed. With `noop` nothing is
    /// deleted. A failed removal is reported and the remaining paths are
    /// still handled.
    pub fn run_on_removals(&self, removed: &[PathBuf]) -> RunReport {
        let options = self.runner.options();
        let fs = self.runner.fs();
        let reporter = self.runner.reporter();
        let mut report = RunReport::default();

        if options.noop {
            return report;
        }

        for input in dedup(self.localize(removed)) {
            if !is_stylesheet(&input) || is_partial(&input) {
                continue;
            }
            let output = map_output_path(&input, options);
            if !fs.exists(&output) {
                continue;
            }
            match fs.remove(&output) {
                Ok(()) => {
                    reporter.info(&format!("Removed {}", output.display()));
                    report.record_success(output);
                }
                Err(err) => {
                    reporter.error(
                        &format!(
                            "{}Error: could not remove {}: {}",
                            MESSAGE_PREFIX,
                            output.display(),
                            err
                        ),
                        Notification::failed(format!("removal of {} failed", output.display())),
                    );
                    report.record_failure();
                }
            }
        }

        report
    }

    fn localize(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        match self.base_dir.as_deref() {
            Some(base) => paths.iter().map(|p| relative_to(p, base)).collect(),
            None => paths.to_vec(),
        }
    }
}

/// Drop repeated paths, keeping the first spelling and the original order
fn dedup(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(normalize(p)))
        .collect()
}
