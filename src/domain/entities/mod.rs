//! Domain Entities
//!
//! Values produced while compiling: outcomes from the engine and batch reports.

mod compile_outcome;
mod run_report;

pub use compile_outcome::{Artifact, CompileOutcome, SyntaxError};
pub use run_report::{FileTask, RunReport};
