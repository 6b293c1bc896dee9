//! Connection configuration types for the Mode client.
//!
//! Responsibilities:
//! - Define connection settings (host, timeout, connection limit, batch mode).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants.rs`, not magic numbers.

use crate::constants::{DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the Mode service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Scheme and authority of the Mode service (e.g. https://app.mode.com)
    pub host: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of requests in flight at the same time
    pub max_connections: usize,
    /// Whether to open a batch API session when the client connects
    #[serde(default)]
    pub batch: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            batch: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a configuration for `workspace` with default connection settings.
    pub fn with_credentials(workspace: String, token: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig {
                workspace,
                token,
                password,
            },
        }
    }
}
