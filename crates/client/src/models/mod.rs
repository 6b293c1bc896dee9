//! Data models for Mode API responses.
//!
//! This module provides types for deserializing Mode REST API responses and
//! serializing request bodies. Types are organized by resource in submodules and
//! re-exported here for convenient access.
//!
//! All records are plain values: every fetch decodes a fresh copy and nothing is
//! cached or shared with the client.

pub mod account;
pub mod batch;
pub mod common;
pub mod definitions;
pub mod queries;
pub mod query_runs;
pub mod report_runs;
pub mod reports;
pub mod spaces;

pub use account::{Account, Avatar, DefinitionLimit};
pub use batch::{
    AuthScope, BatchQuery, BatchQueryPage, IncludeSpaces, SignatureToken, SignatureTokenRequest,
};
pub use common::{Link, Links, Pagination, Timestamp};
pub use definitions::{Definition, DefinitionFields};
pub use queries::{NewQuery, Query, QueryFields};
pub use query_runs::{QueryRun, QueryRunState};
pub use report_runs::{PythonState, ReportRun, ReportRunPage, ReportRunState};
pub use reports::{ListOptions, Order, OrderBy, Report, ReportFields};
pub use spaces::{Space, SpaceFields, SpaceFilter, SpaceType};
