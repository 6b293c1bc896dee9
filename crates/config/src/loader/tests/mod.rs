//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable handling and precedence.
//! - Test validation bounds and `.env` gating.
//!
//! Invariants:
//! - Tests that touch process environment use `serial_test` and `env_lock()`.

use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
