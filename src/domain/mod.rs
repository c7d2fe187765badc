//! Domain Layer
//!
//! Pure compile-orchestration concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Compile outcomes and batch reports
//! - `value_objects/` - Options, output style, stylesheet classification
//! - `services/` - Output path mapping
//! - `ports/` - Interfaces for the engine, file system and reporter

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
