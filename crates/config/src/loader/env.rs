//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `MODE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, raw: &str, message: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: key.to_string(),
        message: message.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("MODE_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(workspace) = env_var_or_none("MODE_WORKSPACE") {
        loader.set_workspace(Some(workspace));
    }
    if let Some(token) = env_var_or_none("MODE_TOKEN") {
        loader.set_token(Some(token));
    }
    if let Some(password) = env_var_or_none("MODE_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(timeout) = env_var_or_none("MODE_TIMEOUT") {
        let secs: u64 = parse_env("MODE_TIMEOUT", &timeout, "must be a number of seconds")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(limit) = env_var_or_none("MODE_MAX_CONNECTIONS") {
        loader.set_max_connections(Some(parse_env(
            "MODE_MAX_CONNECTIONS",
            &limit,
            "must be a positive integer",
        )?));
    }
    if let Some(batch) = env_var_or_none("MODE_BATCH") {
        loader.set_batch(Some(parse_env(
            "MODE_BATCH",
            &batch,
            "must be true or false",
        )?));
    }

    Ok(())
}
