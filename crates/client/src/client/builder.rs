//! Client builder for constructing [`ModeClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (workspace, credentials)
//! - Normalizing the host (removing trailing slashes)
//! - Configuring the HTTP transport (timeout, connection limit)
//! - Opening the batch session when requested
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by the resource clients)
//! - Reading configuration from the environment (handled by `mode-config`)
//!
//! # Invariants
//! - `workspace`, `token` and `password` are required before building
//! - The host is always normalized to have no trailing slashes
//! - A batch session can only be opened by the async [`ModeClientBuilder::connect`]

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use mode_config::Config;
use mode_config::constants::{
    DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
};
use secrecy::SecretString;

use crate::auth::BatchSession;
use crate::client::ModeClient;
use crate::endpoints::{RequestEnvelope, encode_path_segment};
use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};

/// Builder for creating a new [`ModeClient`].
///
/// # Example
///
/// ```rust,ignore
/// use mode_client::ModeClient;
/// use secrecy::SecretString;
///
/// let client = ModeClient::builder()
///     .workspace("acme")
///     .credentials("api-token", SecretString::new("api-password".into()))
///     .timeout(Duration::from_secs(30))
///     .batch(true)
///     .connect()
///     .await?;
/// ```
pub struct ModeClientBuilder {
    host: String,
    workspace: Option<String>,
    token: Option<String>,
    password: Option<SecretString>,
    timeout: Duration,
    max_connections: usize,
    batch: bool,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ModeClientBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            workspace: None,
            token: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            batch: false,
            transport: None,
        }
    }
}

impl fmt::Debug for ModeClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeClientBuilder")
            .field("host", &self.host)
            .field("workspace", &self.workspace)
            .field("token", &self.token)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("max_connections", &self.max_connections)
            .field("batch", &self.batch)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl ModeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Mode host, e.g. `https://app.mode.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the workspace (organization username) requests are scoped to.
    pub fn workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    /// Set the API token and password used for basic auth.
    pub fn credentials(mut self, token: impl Into<String>, password: SecretString) -> Self {
        self.token = Some(token.into());
        self.password = Some(password);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how many requests may be in flight at once.
    ///
    /// Default is 5.
    pub fn max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Open a batch session on [`connect`](Self::connect).
    pub fn batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    /// Use a custom transport instead of the reqwest-backed one.
    ///
    /// `timeout` and `max_connections` are ignored when a transport is supplied.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use mode_client::ModeClient;
    /// use mode_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().from_env()?.build()?;
    /// let client = ModeClient::builder().from_config(&config).connect().await?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.host = config.connection.host.clone();
        self.timeout = config.connection.timeout;
        self.max_connections = config.connection.max_connections;
        self.batch = config.connection.batch;
        self.workspace = Some(config.auth.workspace.clone());
        self.token = Some(config.auth.token.clone());
        self.password = Some(config.auth.password.clone());
        self
    }

    /// Normalize a host by removing trailing slashes.
    ///
    /// - `"https://app.mode.com/"` -> `"https://app.mode.com"`
    /// - `"http://127.0.0.1:8080//"` -> `"http://127.0.0.1:8080"`
    fn normalize_host(host: &str) -> String {
        host.trim().trim_end_matches('/').to_string()
    }

    fn envelope(self) -> Result<(RequestEnvelope, bool)> {
        let host = Self::normalize_host(&self.host);
        if !(host.starts_with("https://") || host.starts_with("http://")) {
            return Err(ClientError::InvalidUrl(format!(
                "host must start with http:// or https://, got {host:?}"
            )));
        }

        let workspace = self
            .workspace
            .filter(|w| !w.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("workspace is required".to_string()))?;
        if encode_path_segment(&workspace) != workspace {
            return Err(ClientError::InvalidUrl(format!(
                "workspace {workspace:?} is not a valid path segment"
            )));
        }

        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Authentication("API token is required".to_string()))?;
        let password = self
            .password
            .ok_or_else(|| ClientError::Authentication("API password is required".to_string()))?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(
                self.timeout,
                self.max_connections,
                DEFAULT_MAX_REDIRECTS,
            )?),
        };

        Ok((
            RequestEnvelope::new(transport, host, workspace, token, password),
            self.batch,
        ))
    }

    /// Build the [`ModeClient`] without a batch session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the host or workspace is unusable.
    /// Returns [`ClientError::Authentication`] if credentials were not provided.
    /// Returns [`ClientError::InvalidArgument`] if `batch(true)` was requested; use
    /// [`connect`](Self::connect) instead.
    pub fn build(self) -> Result<ModeClient> {
        let (envelope, batch) = self.envelope()?;
        if batch {
            return Err(ClientError::InvalidArgument(
                "batch sessions are opened by connect(), not build()".to_string(),
            ));
        }
        Ok(ModeClient::assemble(envelope, None))
    }

    /// Build the [`ModeClient`], opening a batch session first when requested.
    pub async fn connect(self) -> Result<ModeClient> {
        let (envelope, batch) = self.envelope()?;
        let session = if batch {
            Some(BatchSession::open(&envelope).await?)
        } else {
            None
        };
        Ok(ModeClient::assemble(envelope, session))
    }
}
