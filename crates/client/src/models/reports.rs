//! Report models and list options.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{Links, Timestamp};
use crate::serde_helpers::{
    opt_bool_from_bool_or_string, opt_u64_from_string_or_number, u64_from_string_or_number,
};

/// A Mode report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub token: String,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub archived: Option<bool>,
    pub space_token: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub account_id: Option<u64>,
    pub account_username: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub published_at: Option<Timestamp>,
    pub edited_at: Option<Timestamp>,
    pub last_saved_at: Option<Timestamp>,
    pub last_run_at: Option<Timestamp>,
    pub last_successfully_run_at: Option<Timestamp>,
    pub last_successful_sync_at: Option<Timestamp>,
    pub last_successful_run_token: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub query_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub max_query_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub chart_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub runs_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub schedules_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub view_count: Option<u64>,
    pub query_preview: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub theme_id: Option<u64>,
    pub color_mappings: Option<Map<String, Value>>,
    pub layout: Option<String>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub public: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub shared: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub full_width: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub manual_run_disabled: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub run_privately: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub drilldowns_enabled: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub is_embedded: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub is_signed: Option<bool>,
    pub expected_runtime: Option<f64>,
    pub web_preview_image: Option<String>,
    pub github_link: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Report {
    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }
}

/// Fields of a report change. Unset fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_token: Option<&'a str>,
}

impl<'a> From<&'a Report> for ReportFields<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            name: report.name.as_deref(),
            description: report.description.as_deref(),
            space_token: report.space_token.as_deref(),
        }
    }
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Sort key for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    CreatedAt,
    #[default]
    UpdatedAt,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatedAt => write!(f, "created_at"),
            Self::UpdatedAt => write!(f, "updated_at"),
        }
    }
}

/// Options shared by the report and report-run list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Server-side filter expression; omitted when `None` or empty.
    pub filter: Option<String>,
    pub order: Order,
    pub order_by: OrderBy,
}

impl ListOptions {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }
}
