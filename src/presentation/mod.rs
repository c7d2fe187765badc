//! Presentation Layer
//!
//! This layer handles:
//! - Rendering reports for humans (console) or CI (NDJSON)
//! - Creating sessions with infrastructure dependencies
//!
//! ## Structure
//!
//! - `factory` - Creates sessions with proper dependencies (dependency injection)
//! - `formatter` - The `Reporter` used by the CLI
//! - `event` - NDJSON event types
//! - `theme` - Icons, colors and terminal detection

pub mod event;
pub mod factory;
pub mod formatter;
pub mod theme;

pub use factory::{create_session, CliSession};
pub use formatter::{Formatter, OutputMode};
pub use theme::ConsoleStyle;
