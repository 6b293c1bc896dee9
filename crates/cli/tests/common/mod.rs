//! Shared test utilities for mode-cli integration tests.
//!
//! Invariants / Assumptions:
//! - All commands built here are hermetic: no `.env` loading, no `MODE_*` leakage.
//! - Workspace `acme` and credentials `api-token` / `api-password` are set unless overridden.

use assert_cmd::Command;

/// `Authorization` value for `api-token:api-password`.
#[allow(dead_code)]
pub const BASIC_AUTH: &str = "Basic YXBpLXRva2VuOmFwaS1wYXNzd29yZA==";

/// Returns a hermetic `mode-cli` command pointed at `host`.
pub fn mode_cmd(host: &str) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mode-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("MODE_TIMEOUT")
        .env_remove("MODE_MAX_CONNECTIONS")
        .env_remove("MODE_BATCH")
        .env_remove("RUST_LOG");

    cmd.env("MODE_HOST", host)
        .env("MODE_WORKSPACE", "acme")
        .env("MODE_TOKEN", "api-token")
        .env("MODE_PASSWORD", "api-password");

    cmd
}
