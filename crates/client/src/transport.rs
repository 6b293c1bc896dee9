//! HTTP transport abstraction.
//!
//! Responsibilities:
//! - Execute one HTTP round trip for a fully resolved request (absolute URL, credential,
//!   optional JSON body, query pairs).
//! - Bound the number of requests in flight at once.
//!
//! Does NOT handle:
//! - Status code interpretation (see [`crate::endpoints::RequestEnvelope`]).
//! - Retries, backoff, or rate limiting. A failed round trip is reported as-is.
//!
//! Invariants:
//! - Credentials are only exposed when attached to the outgoing request.
//! - At most `max_connections` requests hold a slot; the rest wait in FIFO order.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tokio::sync::Semaphore;

use crate::error::{ClientError, Result};

/// Credential attached to a single request.
#[derive(Clone)]
pub enum Credential {
    /// HTTP basic auth with the long-lived API token and password.
    Basic {
        username: String,
        password: SecretString,
    },
    /// `Authorization: Bearer <value>`, used by the batch surface.
    Bearer(SecretString),
}

impl Credential {
    pub fn basic(username: impl Into<String>, password: SecretString) -> Self {
        Self::Basic {
            username: username.into(),
            password,
        }
    }

    pub fn is_bearer(&self) -> bool {
        matches!(self, Self::Bearer(_))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
        }
    }
}

/// A fully resolved outgoing request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub credential: Credential,
    pub json: Option<Value>,
    pub query: Vec<(String, String)>,
}

/// Status, final URL and body text of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP round trip. Implemented by [`HttpTransport`] and by test doubles.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn execute(&self, request: TransportRequest) -> Result<RawResponse>;

    /// Stop accepting new requests. Requests already holding a slot finish normally.
    fn shutdown(&self) {}
}

/// reqwest-backed transport with a fixed timeout and bounded concurrency.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    slots: Arc<Semaphore>,
}

impl HttpTransport {
    /// Build a transport.
    ///
    /// `max_connections` is clamped to at least one slot.
    pub fn new(timeout: Duration, max_connections: usize, max_redirects: usize) -> Result<Self> {
        let max_connections = max_connections.max(1);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(max_connections)
            .redirect(reqwest::redirect::Policy::limited(max_redirects))
            .build()?;
        Ok(Self {
            http,
            slots: Arc::new(Semaphore::new(max_connections)),
        })
    }

    /// Number of request slots currently free.
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<RawResponse> {
        let _slot = self.slots.acquire().await.map_err(|_| ClientError::Closed)?;

        let mut builder = self.http.request(request.method, &request.url);
        builder = match &request.credential {
            Credential::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Credential::Bearer(token) => builder.bearer_auth(token.expose_secret()),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await?;

        Ok(RawResponse { status, url, body })
    }

    fn shutdown(&self) {
        self.slots.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let basic = Credential::basic("api-token", SecretString::new("hunter2".to_string().into()));
        let bearer = Credential::Bearer(SecretString::new("c2VjcmV0".to_string().into()));

        let basic_debug = format!("{basic:?}");
        assert!(basic_debug.contains("api-token"));
        assert!(!basic_debug.contains("hunter2"));
        assert!(!format!("{bearer:?}").contains("c2VjcmV0"));
        assert!(bearer.is_bearer());
    }

    #[test]
    fn test_http_transport_clamps_zero_connections() {
        let transport = HttpTransport::new(Duration::from_secs(1), 0, 5).unwrap();
        assert_eq!(transport.available_slots(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_rejects_new_requests() {
        let transport = HttpTransport::new(Duration::from_secs(1), 2, 5).unwrap();
        transport.shutdown();

        let result = transport
            .execute(TransportRequest {
                method: Method::GET,
                url: "http://127.0.0.1:9/never".to_string(),
                credential: Credential::basic("t", SecretString::new("p".to_string().into())),
                json: None,
                query: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(ClientError::Closed)));
    }
}
