//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables and builder overrides.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate so tests never pick up a developer's `.env`.
//!
//! Does NOT handle:
//! - Persisting configuration back to disk.
//! - Talking to the Mode service (see client crate).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
