//! Batch session bootstrap: exchanging the basic credential for a signature token.
//!
//! Responsibilities:
//! - Issue a short-lived, read-only signature token for the batch API.
//! - Derive the bearer value `base64("{token}:{access_key}:{access_secret}")`.
//! - Revoke the token on [`BatchSession::close`], or best-effort on drop.
//!
//! Does NOT handle:
//! - Renewal. A session lives at most as long as the token it was opened with.
//! - Batch resource calls (see [`crate::client::BatchQueryClient`]).
//!
//! Invariants:
//! - Signature token endpoints always use the basic credential.
//! - A session moves `open -> closed` once; `close` consumes it.
//! - Secret material is never logged.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use mode_config::constants::BATCH_TOKEN_TTL_SECS;
use secrecy::SecretString;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::endpoints::{ApiRequest, RequestEnvelope, Requester, Surface, encode_path_segment};
use crate::error::{ClientError, Result};
use crate::models::{AuthScope, SignatureToken, SignatureTokenRequest};

const SIGNATURE_TOKENS_PATH: &str = "/signature_tokens";

/// An open batch session, owning the signature token until closed.
#[derive(Debug)]
pub struct BatchSession {
    envelope: RequestEnvelope,
    token: Option<String>,
    bearer: SecretString,
}

impl BatchSession {
    /// Issue a signature token valid for 24 hours.
    pub async fn open(envelope: &RequestEnvelope) -> Result<Self> {
        Self::open_at(envelope, Utc::now()).await
    }

    pub(crate) async fn open_at(envelope: &RequestEnvelope, now: DateTime<Utc>) -> Result<Self> {
        let request = signature_token_request(now);
        let body = json!({ "signature_token": request });

        let issued: SignatureToken = envelope
            .request(
                ApiRequest::post(SIGNATURE_TOKENS_PATH)
                    .on(Surface::Signing)
                    .json(body),
            )
            .await
            .and_then(|body| body.decode("signature token"))
            .map_err(|e| {
                ClientError::Authentication(format!("could not issue signature token: {e}"))
            })?;

        info!(
            token = %issued.token,
            workspace = %envelope.workspace(),
            "Opened Mode batch session"
        );

        Ok(Self {
            envelope: envelope.clone(),
            bearer: bearer_value(&issued),
            token: Some(issued.token),
        })
    }

    /// Bearer value for `Authorization: Bearer ...` on batch requests.
    pub fn bearer(&self) -> &SecretString {
        &self.bearer
    }

    /// Teardown identifier of the issued token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Revoke the signature token.
    ///
    /// Local state is released even when revocation fails.
    pub async fn close(mut self) -> Result<()> {
        let Some(token) = self.token.take() else {
            return Ok(());
        };
        revoke(&self.envelope, &token).await?;
        info!(token = %token, "Closed Mode batch session");
        Ok(())
    }
}

impl Drop for BatchSession {
    fn drop(&mut self) {
        let Some(token) = self.token.take() else {
            return;
        };

        warn!(token = %token, "Mode batch session dropped without close; revoking in background");
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let envelope = self.envelope.clone();
                handle.spawn(async move {
                    if let Err(e) = revoke(&envelope, &token).await {
                        warn!(token = %token, error = %e, "Background signature token revocation failed");
                    }
                });
            }
            Err(_) => {
                warn!(token = %token, "No async runtime available; signature token was not revoked");
            }
        }
    }
}

fn signature_token_request(now: DateTime<Utc>) -> SignatureTokenRequest {
    let expires_at = now + Duration::seconds(BATCH_TOKEN_TTL_SECS);
    SignatureTokenRequest {
        name: Uuid::new_v4().to_string(),
        expires_at: expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        auth_scope: AuthScope::batch_read_only(),
    }
}

fn bearer_value(issued: &SignatureToken) -> SecretString {
    let raw = format!(
        "{}:{}:{}",
        issued.token, issued.access_key, issued.access_secret
    );
    SecretString::new(STANDARD.encode(raw).into())
}

async fn revoke(envelope: &RequestEnvelope, token: &str) -> Result<()> {
    let path = format!("{SIGNATURE_TOKENS_PATH}/{}", encode_path_segment(token));
    envelope
        .request(ApiRequest::delete(path).on(Surface::Signing))
        .await
        .map(|_| ())
        .map_err(|e| ClientError::Authentication(format!("could not revoke signature token: {e}")))
}
