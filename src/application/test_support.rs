//! Shared mocks for application-layer tests

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::entities::{Artifact, CompileOutcome, SyntaxError};
use crate::domain::ports::{CompileEngine, FileSystem, FsError, FsResult, Notification, Reporter};
use crate::domain::value_objects::EngineOptions;

#[derive(Default)]
pub(crate) struct MockEngine {
    pub(crate) outputs: HashMap<PathBuf, Result<String, SyntaxError>>,
    pub(crate) dependencies: HashMap<PathBuf, Result<Vec<PathBuf>, SyntaxError>>,
    pub(crate) compiled: RefCell<Vec<PathBuf>>,
    pub(crate) resolved: RefCell<Vec<PathBuf>>,
    pub(crate) seen_options: RefCell<Vec<EngineOptions>>,
}

impl MockEngine {
    pub(crate) fn compiling(mut self, path: &str, css: &str) -> Self {
        self.outputs.insert(PathBuf::from(path), Ok(css.to_string()));
        self
    }

    pub(crate) fn failing(mut self, path: &str, err: SyntaxError) -> Self {
        self.outputs.insert(PathBuf::from(path), Err(err));
        self
    }

    pub(crate) fn depending(mut self, path: &str, deps: &[&str]) -> Self {
        self.dependencies.insert(
            PathBuf::from(path),
            Ok(deps.iter().map(PathBuf::from).collect()),
        );
        self
    }

    pub(crate) fn unresolvable(mut self, path: &str, err: SyntaxError) -> Self {
        self.dependencies.insert(PathBuf::from(path), Err(err));
        self
    }
}

impl CompileEngine for MockEngine {
    fn compile(&self, path: &Path, options: &EngineOptions) -> CompileOutcome {
        self.compiled.borrow_mut().push(path.to_path_buf());
        self.seen_options.borrow_mut().push(options.clone());
        match self.outputs.get(path) {
            Some(Ok(css)) => CompileOutcome::Success(Artifact::new(css.clone())),
            Some(Err(err)) => CompileOutcome::SyntaxFailure(err.clone()),
            None => CompileOutcome::Success(Artifact::default()),
        }
    }

    fn resolve_dependencies(
        &self,
        path: &Path,
        _options: &EngineOptions,
    ) -> Result<Vec<PathBuf>, SyntaxError> {
        self.resolved.borrow_mut().push(path.to_path_buf());
        self.dependencies
            .get(path)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
pub(crate) struct MockFileSystem {
    pub(crate) files: RefCell<HashMap<PathBuf, String>>,
    pub(crate) dirs: RefCell<BTreeSet<PathBuf>>,
    pub(crate) read_only: RefCell<BTreeSet<PathBuf>>,
}

impl FileSystem for MockFileSystem {
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.read_only.borrow().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        if self.read_only.borrow().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files.borrow_mut().remove(path);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Success(String, Notification),
    Error(String, Notification),
    Info(String),
}

#[derive(Default)]
pub(crate) struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn errors(&self) -> Vec<(String, Notification)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(m, n) => Some((m, n)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn success(&self, message: &str, notification: Notification) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Success(message.to_string(), notification));
    }

    fn error(&self, message: &str, notification: Notification) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Error(message.to_string(), notification));
    }

    fn info(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Info(message.to_string()));
    }
}

pub(crate) fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
