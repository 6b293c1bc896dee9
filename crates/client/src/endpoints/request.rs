//! The request envelope: the single chokepoint every API call passes through.
//!
//! Responsibilities:
//! - Resolve a surface-relative path into an absolute URL.
//! - Pick the credential for the surface (basic for `/api` and signature tokens,
//!   bearer for the rest of `/batch`).
//! - Turn non-2xx responses into [`ClientError::Api`].
//! - Parse the body as JSON, falling back to raw text.
//!
//! Does NOT handle:
//! - Typed decoding (see [`ResponseBody::decode`] and the resource clients).
//! - Retries. Every failure propagates to the caller.
//!
//! Invariants:
//! - A request is sent at most once.
//! - Requests for [`Surface::Batch`] fail locally when no bearer token is attached.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::params::QueryParams;
use crate::error::{ClientError, Result};
use crate::transport::{Credential, Transport, TransportRequest};

/// Which base URL (and credential) a path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// `{host}/api`, not scoped to a workspace. Basic auth.
    Account,
    /// `{host}/api/{workspace}`. Basic auth.
    Workspace,
    /// `{host}/batch/{workspace}`. Bearer auth from a signature token.
    Batch,
    /// `{host}/batch/{workspace}/signature_tokens`. Basic auth.
    Signing,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Account => "account",
            Self::Workspace => "workspace",
            Self::Batch => "batch",
            Self::Signing => "signing",
        };
        f.write_str(name)
    }
}

/// A request before URL and credential resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub surface: Surface,
    pub path: String,
    pub json: Option<Value>,
    pub params: QueryParams,
}

impl ApiRequest {
    /// Workspace-relative request with no body or parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            surface: Surface::Workspace,
            path: path.into(),
            json: None,
            params: QueryParams::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn on(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }
}

/// A successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// Body that is not JSON, e.g. the empty body of a DELETE.
    Text(String),
}

impl ResponseBody {
    /// Parse response text, keeping it as text when it is not JSON.
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    /// Decode the whole body into `T`.
    pub fn decode<T: DeserializeOwned>(self, resource: &'static str) -> Result<T> {
        decode_value(self.into_json(resource)?, resource, "")
    }

    /// Decode `_embedded.<key>` into a list, preserving server order.
    pub fn embedded<T: DeserializeOwned>(self, key: &str, resource: &'static str) -> Result<Vec<T>> {
        let value = self.into_json(resource)?;
        let items = take_embedded(value, key, resource)?;
        decode_value(items, resource, &format!("_embedded.{key}"))
    }

    /// The body as a JSON value; text bodies become a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

    /// The JSON value, or a decode error when the body was text.
    pub fn into_json(self, resource: &'static str) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) => Err(ClientError::Decode {
                resource,
                path: ".".to_string(),
                message: format!("expected a JSON body, got {} bytes of text", text.len()),
            }),
        }
    }
}

fn take_embedded(mut value: Value, key: &str, resource: &'static str) -> Result<Value> {
    value
        .get_mut("_embedded")
        .and_then(|embedded| embedded.get_mut(key))
        .map(Value::take)
        .ok_or_else(|| ClientError::Decode {
            resource,
            path: format!("_embedded.{key}"),
            message: "missing field".to_string(),
        })
}

/// Move the value at a JSON pointer out of `value`, leaving `null` behind.
pub(crate) fn take_pointer(value: &mut Value, pointer: &str) -> Value {
    value
        .pointer_mut(pointer)
        .map(Value::take)
        .unwrap_or(Value::Null)
}

/// Decode a JSON value, reporting the path of the first field that does not fit.
pub(crate) fn decode_value<T: DeserializeOwned>(
    value: Value,
    resource: &'static str,
    prefix: &str,
) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let inner = err.path().to_string();
        let message = err.into_inner().to_string();
        let path = join_path(prefix, &inner);
        // serde reports a missing field at its parent; point at the field itself.
        let path = match missing_field(&message) {
            Some(field) => join_path(&path, field),
            None => path,
        };
        ClientError::Decode {
            resource,
            path,
            message,
        }
    })
}

fn join_path(prefix: &str, inner: &str) -> String {
    match (prefix, inner) {
        ("" | ".", _) => inner.to_string(),
        (_, "." | "") => prefix.to_string(),
        (_, _) if inner.starts_with('[') => format!("{prefix}{inner}"),
        (_, _) => format!("{prefix}.{inner}"),
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
}

/// Sends [`ApiRequest`]s. Resource clients depend on this, not on HTTP.
#[async_trait]
pub trait Requester: Send + Sync + fmt::Debug {
    async fn request(&self, request: ApiRequest) -> Result<ResponseBody>;
}

/// [`Requester`] over a [`Transport`], holding the base URLs and credentials.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    transport: Arc<dyn Transport>,
    host: String,
    workspace: String,
    basic: Credential,
    bearer: Option<Credential>,
}

impl RequestEnvelope {
    pub fn new(
        transport: Arc<dyn Transport>,
        host: impl Into<String>,
        workspace: impl Into<String>,
        token: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            transport,
            host: host.into(),
            workspace: workspace.into(),
            basic: Credential::basic(token, password),
            bearer: None,
        }
    }

    /// Copy of this envelope that authenticates batch requests with `bearer`.
    pub fn with_bearer(&self, bearer: SecretString) -> Self {
        Self {
            bearer: Some(Credential::Bearer(bearer)),
            ..self.clone()
        }
    }

    pub fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Base URL for a surface, without a trailing slash.
    pub fn base_url(&self, surface: Surface) -> String {
        match surface {
            Surface::Account => format!("{}/api", self.host),
            Surface::Workspace => format!("{}/api/{}", self.host, self.workspace),
            Surface::Batch | Surface::Signing => {
                format!("{}/batch/{}", self.host, self.workspace)
            }
        }
    }

    /// Absolute URL for a surface-relative path.
    pub fn url_for(&self, surface: Surface, path: &str) -> String {
        let base = self.base_url(surface);
        if path.is_empty() || path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    fn credential_for(&self, surface: Surface) -> Result<&Credential> {
        match surface {
            Surface::Batch => self.bearer.as_ref().ok_or_else(|| {
                ClientError::Authentication("no batch session is open".to_string())
            }),
            Surface::Account | Surface::Workspace | Surface::Signing => Ok(&self.basic),
        }
    }
}

#[async_trait]
impl Requester for RequestEnvelope {
    async fn request(&self, request: ApiRequest) -> Result<ResponseBody> {
        let credential = self.credential_for(request.surface)?.clone();
        let url = self.url_for(request.surface, &request.path);

        debug!(
            method = %request.method,
            surface = %request.surface,
            path = %request.path,
            params = request.params.len(),
            "Sending Mode API request"
        );

        let response = self
            .transport
            .execute(TransportRequest {
                method: request.method,
                url,
                credential,
                json: request.json,
                query: request.params.into_pairs(),
            })
            .await?;

        debug!(status = response.status, path = %request.path, "Received Mode API response");

        if !response.is_success() {
            return Err(ClientError::Api {
                status: response.status,
                url: response.url,
                body: response.body,
            });
        }

        Ok(ResponseBody::parse(response.body))
    }
}
