//! Main Mode API client and its resource clients.
//!
//! This module provides the [`ModeClient`] facade, which aggregates one client per
//! Mode resource behind a single entry point and owns the transport lifecycle.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `account`, `queries`, `query_runs`, `reports`, `report_runs`, `spaces`,
//!   `definitions`: workspace and account resources over `/api`
//! - `batch`: account-wide query listing over `/batch`
//!
//! # What this module does NOT handle:
//! - URL resolution, credentials and status handling (delegated to
//!   [`crate::endpoints::RequestEnvelope`])
//! - Signature token issuance (delegated to [`crate::auth::BatchSession`])
//!
//! # Invariants
//! - All resource clients share one [`Requester`]; the batch client gets a copy of it
//!   carrying the bearer credential.
//! - A batch session, when opened, is revoked by [`ModeClient::close`] before the
//!   transport stops accepting requests.

pub mod builder;

mod account;
mod batch;
mod definitions;
mod queries;
mod query_runs;
mod report_runs;
mod reports;
mod spaces;

use std::sync::Arc;

use tracing::debug;

use crate::auth::BatchSession;
use crate::endpoints::{RequestEnvelope, Requester};
use crate::error::{ClientError, Result};

pub use account::AccountClient;
pub use batch::BatchQueryClient;
pub use builder::ModeClientBuilder;
pub use definitions::DefinitionClient;
pub use queries::QueryClient;
pub use query_runs::QueryRunClient;
pub use report_runs::ReportRunClient;
pub use reports::ReportClient;
pub use spaces::SpaceClient;

/// Mode REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use mode_client::ModeClient;
/// use secrecy::SecretString;
///
/// let client = ModeClient::builder()
///     .workspace("acme")
///     .credentials("api-token", SecretString::new("api-password".into()))
///     .build()?;
///
/// let report = client.reports().get("a1b2c3").await?;
/// client.close().await?;
/// ```
///
/// Use [`ModeClientBuilder::connect`] with `.batch(true)` to also open a batch session.
#[derive(Debug)]
pub struct ModeClient {
    envelope: RequestEnvelope,
    account: AccountClient,
    queries: QueryClient,
    query_runs: QueryRunClient,
    reports: ReportClient,
    report_runs: ReportRunClient,
    spaces: SpaceClient,
    definitions: DefinitionClient,
    batch: Option<(BatchSession, BatchQueryClient)>,
}

impl ModeClient {
    /// Create a new client builder.
    pub fn builder() -> ModeClientBuilder {
        ModeClientBuilder::new()
    }

    pub(crate) fn assemble(envelope: RequestEnvelope, session: Option<BatchSession>) -> Self {
        let requester: Arc<dyn Requester> = Arc::new(envelope.clone());
        let batch = session.map(|session| {
            let bearer: Arc<dyn Requester> =
                Arc::new(envelope.with_bearer(session.bearer().clone()));
            (session, BatchQueryClient::new(bearer))
        });

        Self {
            account: AccountClient::new(requester.clone()),
            queries: QueryClient::new(requester.clone()),
            query_runs: QueryRunClient::new(requester.clone()),
            reports: ReportClient::new(requester.clone()),
            report_runs: ReportRunClient::new(requester.clone()),
            spaces: SpaceClient::new(requester.clone()),
            definitions: DefinitionClient::new(requester),
            envelope,
            batch,
        }
    }

    pub fn account(&self) -> &AccountClient {
        &self.account
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    pub fn query_runs(&self) -> &QueryRunClient {
        &self.query_runs
    }

    pub fn reports(&self) -> &ReportClient {
        &self.reports
    }

    pub fn report_runs(&self) -> &ReportRunClient {
        &self.report_runs
    }

    pub fn spaces(&self) -> &SpaceClient {
        &self.spaces
    }

    pub fn definitions(&self) -> &DefinitionClient {
        &self.definitions
    }

    /// The batch query client, available when the client was connected with a batch session.
    pub fn batch_queries(&self) -> Result<&BatchQueryClient> {
        self.batch.as_ref().map(|(_, client)| client).ok_or_else(|| {
            ClientError::InvalidArgument(
                "batch queries need a client connected with .batch(true)".to_string(),
            )
        })
    }

    pub fn has_batch_session(&self) -> bool {
        self.batch.is_some()
    }

    /// Workspace this client is scoped to.
    pub fn workspace(&self) -> &str {
        self.envelope.workspace()
    }

    /// Revoke the batch session (if any) and stop the transport.
    ///
    /// The transport is stopped even when revocation fails; the revocation error is
    /// returned afterwards.
    pub async fn close(mut self) -> Result<()> {
        let revoked = match self.batch.take() {
            Some((session, _)) => session.close().await,
            None => Ok(()),
        };
        self.envelope.transport().shutdown();
        debug!(workspace = %self.envelope.workspace(), "Mode client closed");
        revoked
    }
}
