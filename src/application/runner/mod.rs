//! Runner
//!
//! Compiles batches of changed stylesheets and answers "which files import
//! this partial?". Both operations isolate failures per file: an error is
//! reported once and the batch carries on.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{CompileOutcome, FileTask, RunReport, SyntaxError};
use crate::domain::ports::{CompileEngine, FileSystem, FsError, Notification, Reporter};
use crate::domain::services::{file_task, normalize};
use crate::domain::value_objects::{CompileOptions, EngineOptions};


/// Prefix on every message the runner reports
pub const MESSAGE_PREFIX: &str = "Sass > ";

/// Why a single file did not produce an output
#[derive(Debug)]
enum FileFailure {
    Syntax(SyntaxError),
    Fs { path: PathBuf, error: FsError },
}

impl FileFailure {
    fn render_for(&self, input: &Path) -> String {
        match self {
            FileFailure::Syntax(err) => err.render_for(input),
            FileFailure::Fs { path, error } => {
                format!("Error: could not write {}: {}", path.display(), error)
            }
        }
    }
}

/// Compile-and-report runner
pub struct Runner<E, FS, R>
where
    E: CompileEngine,
    FS: FileSystem,
    R: Reporter,
{
    engine: E,
    fs: FS,
    reporter: R,
    options: CompileOptions,
}

impl<E, FS, R> Runner<E, FS, R>
where
    E: CompileEngine,
    FS: FileSystem,
    R: Reporter,
{
    /// Create a new runner
    pub fn new(engine: E, fs: FS, reporter: R, options: CompileOptions) -> Self {
        Self {
            engine,
            fs,
            reporter,
            options,
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Compile every changed file, in order
    ///
    /// Returns the output paths of the files that compiled, in input order,
    /// and whether every file succeeded. Failures never abort the batch.
    pub fn run(&self, changed: &[PathBuf]) -> RunReport {
        let engine_options = self.options.engine_options();
        let mut report = RunReport::new();

        for input in changed {
            let task = file_task(input, &self.options);
            match self.compile_task(&task, &engine_options) {
                Ok(()) => {
                    self.report_compiled(&task);
                    report.record_success(task.output);
                }
                Err(failure) => {
                    self.reporter.error(
                        &format!("{}{}", MESSAGE_PREFIX, failure.render_for(input)),
                        Notification::failed(format!("rebuild of {} failed", input.display())),
                    );
                    report.record_failure();
                }
            }
        }

        report
    }

    /// Files in `all_files` that import any of `changed_partials`
    ///
    /// Keeps the order of `all_files`; each file appears at most once. A file
    /// whose imports cannot be resolved is reported and treated as importing
    /// nothing.
    pub fn owners(&self, all_files: &[PathBuf], changed_partials: &[PathBuf]) -> Vec<PathBuf> {
        if changed_partials.is_empty() {
            return Vec::new();
        }

        let partials: HashSet<PathBuf> = changed_partials.iter().map(|p| normalize(p)).collect();
        let engine_options = self.options.engine_options();
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut owners = Vec::new();

        for file in all_files {
            if !seen.insert(normalize(file)) {
                continue;
            }

            let dependencies = match self.engine.resolve_dependencies(file, &engine_options) {
                Ok(dependencies) => dependencies,
                Err(err) => {
                    self.reporter.error(
                        &format!("{}{}", MESSAGE_PREFIX, err.render_for(file)),
                        Notification::failed(format!(
                            "Resolving partial owners of {} failed",
                            file.display()
                        )),
                    );
                    continue;
                }
            };

            if dependencies
                .iter()
                .any(|dep| partials.contains(&normalize(dep)))
            {
                owners.push(file.clone());
            }
        }

        owners
    }

    fn compile_task(
        &self,
        task: &FileTask,
        engine_options: &EngineOptions,
    ) -> Result<(), FileFailure> {
        if !self.options.noop {
            if let Some(dir) = task.output_dir() {
                self.fs.create_dir_all(dir).map_err(|error| FileFailure::Fs {
                    path: dir.to_path_buf(),
                    error,
                })?;
            }
        }

        let artifact = match self.engine.compile(&task.input, engine_options) {
            CompileOutcome::Success(artifact) => artifact,
            CompileOutcome::SyntaxFailure(err) => return Err(FileFailure::Syntax(err)),
        };

        if !self.options.noop {
            self.fs
                .write(&task.output, artifact.css())
                .map_err(|error| FileFailure::Fs {
                    path: task.output.clone(),
                    error,
                })?;
        }

        Ok(())
    }

    fn report_compiled(&self, task: &FileTask) {
        let message = if self.options.noop {
            format!("verified {}", task.input.display())
        } else {
            format!("{} -> {}", task.input.display(), task.output.display())
        };
        self.reporter.success(
            &message,
            Notification::success(format!("rebuild of {} succeeded", task.input.display())),
        );
    }
}
