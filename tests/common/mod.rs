//! Common test utilities for sass-guard scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - `FakeEngine`, `MemoryFs`, `Recorder`: in-memory ports for scenario tests

#![allow(dead_code)]

pub mod env;
pub mod fakes;

pub use env::*;
pub use fakes::*;
