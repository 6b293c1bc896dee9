//! Testing utilities for Mode client tests.
//!
//! This module provides fixture loading and in-memory doubles for the two
//! substitution points of the client: [`Transport`] (below the request envelope)
//! and [`Requester`] (below the resource clients).
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use mode_client::client::ReportClient;
//! use mode_client::testing::{RecordingRequester, load_fixture};
//!
//! let requester = Arc::new(RecordingRequester::new());
//! requester.push_json(load_fixture("reports/get_report.json"));
//! let reports = ReportClient::new(requester.clone());
//! ```

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::endpoints::{ApiRequest, Requester, ResponseBody};
use crate::error::{ClientError, Result};
use crate::transport::{RawResponse, Transport, TransportRequest};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "reports/get_report.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// [`Transport`] that records requests and replays canned responses in order.
///
/// When no response is queued, it answers `500` so a missing setup fails loudly.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response. An empty `url` is replaced by the request URL.
    pub fn push_response(&self, response: RawResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_text(status, &body.to_string());
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.push_response(RawResponse {
            status,
            url: String::new(),
            body: body.to_string(),
        });
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: TransportRequest) -> Result<RawResponse> {
        let url = request.url.clone();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let mut response = next.unwrap_or_else(|| RawResponse {
            status: 500,
            url: String::new(),
            body: "no canned response queued".to_string(),
        });
        if response.url.is_empty() {
            response.url = url;
        }
        Ok(response)
    }
}

/// [`Requester`] that records [`ApiRequest`]s and replays canned bodies in order.
///
/// When no body is queued, it answers with an empty JSON object.
#[derive(Debug, Default)]
pub struct RecordingRequester {
    responses: Mutex<VecDeque<Result<ResponseBody>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, body: Value) {
        self.push(Ok(ResponseBody::Json(body)));
    }

    pub fn push_text(&self, body: &str) {
        self.push(Ok(ResponseBody::Text(body.to_string())));
    }

    pub fn push_error(&self, error: ClientError) {
        self.push(Err(error));
    }

    fn push(&self, response: Result<ResponseBody>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent request.
    ///
    /// # Panics
    /// If no request was made.
    pub fn last_request(&self) -> ApiRequest {
        self.requests()
            .pop()
            .expect("no request was recorded")
    }
}

#[async_trait]
impl Requester for RecordingRequester {
    async fn request(&self, request: ApiRequest) -> Result<ResponseBody> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(ResponseBody::Json(Value::Object(Default::default()))))
    }
}
