//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Runner` - Compiles batches and resolves partial owners
//! - `Session` - Start-up, change and removal handling on top of the runner

pub mod runner;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use runner::{Runner, MESSAGE_PREFIX};
pub use session::Session;
