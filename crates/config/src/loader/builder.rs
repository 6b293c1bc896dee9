//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from `.env`, environment variables and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT_SECS, MAX_MAX_CONNECTIONS,
    MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    host: Option<String>,
    workspace: Option<String>,
    token: Option<String>,
    password: Option<SecretString>,
    timeout: Option<Duration>,
    max_connections: Option<usize>,
    batch: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `MODE_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the Mode host (scheme and authority).
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the workspace name.
    pub fn with_workspace(mut self, workspace: String) -> Self {
        self.workspace = Some(workspace);
        self
    }

    /// Set the API token name.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the API token secret.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of simultaneous in-flight requests.
    pub fn with_max_connections(mut self, limit: usize) -> Self {
        self.max_connections = Some(limit);
        self
    }

    /// Enable or disable the batch API session.
    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = Some(batch);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let host = validate_and_normalize_host(self.host.as_deref().unwrap_or(DEFAULT_HOST))?;

        let workspace = self
            .workspace
            .filter(|w| !w.trim().is_empty())
            .ok_or(ConfigError::MissingSetting("workspace (MODE_WORKSPACE)"))?;
        let token = self
            .token
            .ok_or(ConfigError::MissingSetting("API token (MODE_TOKEN)"))?;
        let password = self
            .password
            .ok_or(ConfigError::MissingSetting("API password (MODE_PASSWORD)"))?;

        let connection = ConnectionConfig {
            host,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_connections: self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            batch: self.batch.unwrap_or(false),
        };

        Self::validate_connection(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig {
                workspace,
                token,
                password,
            },
        })
    }

    /// Validates the numeric connection settings against their bounds.
    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_connections == 0 || connection.max_connections > MAX_MAX_CONNECTIONS {
            return Err(ConfigError::InvalidMaxConnections {
                message: format!(
                    "must be between 1 and {} (got {})",
                    MAX_MAX_CONNECTIONS, connection.max_connections
                ),
            });
        }

        Ok(())
    }

    // Internal setters for env.rs

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_workspace(&mut self, workspace: Option<String>) {
        self.workspace = workspace;
    }

    pub(crate) fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_connections(&mut self, limit: Option<usize>) {
        self.max_connections = limit;
    }

    pub(crate) fn set_batch(&mut self, batch: Option<bool>) {
        self.batch = batch;
    }
}

fn validate_and_normalize_host(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "host".into(),
        message: format!("must be an absolute http(s) URL (e.g. https://app.mode.com): {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "host".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "host".into(),
            message: "host is required (e.g. https://app.mode.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
