//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `engine/` - Compile engine backed by the `sass` executable
//! - `fs/` - Local file system
//! - `corpus` - Stylesheet discovery under a source directory

pub mod corpus;
pub mod engine;
pub mod fs;

// Re-export for convenience
pub use corpus::WalkCorpus;
pub use engine::SassCliEngine;
pub use fs::LocalFs;
