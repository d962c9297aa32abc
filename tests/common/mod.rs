//! Common test utilities for treepick CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - Fixtures: tree and selection documents used across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
