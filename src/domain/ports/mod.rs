//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_engine;
pub mod corpus;
pub mod file_system;
pub mod reporter;

pub use compile_engine::CompileEngine;
pub use corpus::Corpus;
pub use file_system::{FileSystem, FsError, FsResult};
pub use reporter::{NoopReporter, Notification, NotifyImage, Reporter, NOTIFICATION_TITLE};
