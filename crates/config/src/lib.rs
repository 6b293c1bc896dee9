//! Configuration management for the Mode client.
//!
//! This crate provides types and loaders for assembling Mode connection
//! settings and credentials from `.env` files, environment variables and
//! explicit overrides. The client crate only consumes the built [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
