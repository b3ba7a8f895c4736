//! Common test utilities for icon-ingest CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus a CLI runner
//! - Assertion macros: `assert_placed!`, `assert_not_placed!`
//! - Fixtures: Ledger texts shared across tests

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
