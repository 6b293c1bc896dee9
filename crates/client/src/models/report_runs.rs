//! Report run models.
//!
//! Run states are read-only reflections of the server. The client never moves a run
//! between states; it only classifies what the server reports.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{Links, Pagination, Timestamp};
use crate::serde_helpers::opt_bool_from_bool_or_string;

/// Server state of a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportRunState {
    Pending,
    Enqueued,
    Cancelled,
    Failed,
    Succeeded,
    Completed,
    RunningNotebook,
}

impl ReportRunState {
    /// Whether the run can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Cancelled | Self::Failed | Self::Succeeded | Self::Completed
        )
    }
}

impl fmt::Display for ReportRunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Enqueued => "enqueued",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::Succeeded => "succeeded",
            Self::Completed => "completed",
            Self::RunningNotebook => "running_notebook",
        };
        f.write_str(s)
    }
}

/// State of the notebook (Python) part of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PythonState {
    None,
    Pending,
    Failed,
    Submitted,
    Succeeded,
    Skipped,
}

/// One execution of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRun {
    pub token: String,
    pub state: ReportRunState,
    pub python_state: PythonState,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub form_fields: Vec<Value>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub purge_started_at: Option<Timestamp>,
    pub purge_completed_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub is_latest_report_run: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub is_latest_successful_report_run: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub report_has_failures_since_last_success: Option<bool>,
    pub flamingo_host: Option<String>,
    pub flamingo_signature: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl ReportRun {
    /// Whether the server reports a final state for this run.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// One page of report runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRunPage {
    pub pagination: Pagination,
    pub report_runs: Vec<ReportRun>,
}
