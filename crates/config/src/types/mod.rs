//! Configuration type definitions for the Mode client.
//!
//! Responsibilities:
//! - Define connection settings and workspace credentials.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections or the batch token exchange (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
