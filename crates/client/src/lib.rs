//! Mode analytics REST API client.
//!
//! This crate provides a typed client for the Mode REST API: reports, queries,
//! spaces, definitions, accounts and run history over `/api`, plus the read-only
//! batch surface over `/batch`, authenticated with a short-lived signature token.
//!
//! Layers, from the wire up: [`transport`] (one HTTP round trip), [`endpoints`]
//! (the request envelope every call passes through), the resource clients in
//! [`client`], and the [`ModeClient`] facade that owns them.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::BatchSession;
pub use client::builder::ModeClientBuilder;
pub use client::{
    AccountClient, BatchQueryClient, DefinitionClient, ModeClient, QueryClient, QueryRunClient,
    ReportClient, ReportRunClient, SpaceClient,
};
pub use endpoints::{ApiRequest, QueryParams, RequestEnvelope, Requester, ResponseBody, Surface};
pub use error::{ClientError, Result};
pub use models::{
    Account, BatchQuery, BatchQueryPage, Definition, DefinitionFields, DefinitionLimit,
    IncludeSpaces, ListOptions, NewQuery, Order, OrderBy, Pagination, PythonState, Query,
    QueryFields, QueryRun, QueryRunState, Report, ReportFields, ReportRun, ReportRunPage,
    ReportRunState, Space, SpaceFields, SpaceFilter, SpaceType, Timestamp,
};
pub use transport::{Credential, HttpTransport, RawResponse, Transport, TransportRequest};
