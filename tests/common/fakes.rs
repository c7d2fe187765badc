//! In-memory implementations of the domain ports.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sass_guard::domain::ports::{FsError, FsResult};
use sass_guard::{
    Artifact, CompileEngine, CompileOutcome, EngineOptions, FileSystem, Notification, Reporter,
    SyntaxError,
};

/// Engine answering from fixed tables
#[derive(Default)]
pub struct FakeEngine {
    pub failures: HashMap<PathBuf, SyntaxError>,
    pub dependencies: HashMap<PathBuf, Result<Vec<PathBuf>, SyntaxError>>,
}

impl FakeEngine {
    pub fn failing(mut self, path: &str, error: SyntaxError) -> Self {
        self.failures.insert(PathBuf::from(path), error);
        self
    }

    pub fn depending(mut self, path: &str, deps: &[&str]) -> Self {
        self.dependencies.insert(
            PathBuf::from(path),
            Ok(deps.iter().map(PathBuf::from).collect()),
        );
        self
    }

    pub fn unresolvable(mut self, path: &str, error: SyntaxError) -> Self {
        self.dependencies.insert(PathBuf::from(path), Err(error));
        self
    }
}

impl CompileEngine for FakeEngine {
    fn compile(&self, path: &Path, _options: &EngineOptions) -> CompileOutcome {
        match self.failures.get(path) {
            Some(err) => CompileOutcome::SyntaxFailure(err.clone()),
            None => CompileOutcome::Success(Artifact::new(format!("/* {} */", path.display()))),
        }
    }

    fn resolve_dependencies(
        &self,
        path: &Path,
        _options: &EngineOptions,
    ) -> Result<Vec<PathBuf>, SyntaxError> {
        self.dependencies.get(path).cloned().unwrap_or(Ok(Vec::new()))
    }
}

/// File system kept in a map
#[derive(Default)]
pub struct MemoryFs {
    pub files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryFs {
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn exists_path(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(Path::new(path))
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl FileSystem for MemoryFs {
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        match self.files.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }
}

/// Reported event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported {
    Success(String, Notification),
    Error(String, Notification),
    Info(String),
}

/// Reporter that records every event
#[derive(Default)]
pub struct Recorder {
    pub events: Mutex<Vec<Reported>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Reported> {
        self.events.lock().unwrap().clone()
    }

    pub fn successes(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Reported::Success(..)))
            .count()
    }

    pub fn errors(&self) -> Vec<(String, Notification)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Reported::Error(m, n) => Some((m, n)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for Recorder {
    fn success(&self, message: &str, notification: Notification) {
        self.events
            .lock()
            .unwrap()
            .push(Reported::Success(message.to_string(), notification));
    }

    fn error(&self, message: &str, notification: Notification) {
        self.events
            .lock()
            .unwrap()
            .push(Reported::Error(message.to_string(), notification));
    }

    fn info(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Reported::Info(message.to_string()));
    }
}

pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
