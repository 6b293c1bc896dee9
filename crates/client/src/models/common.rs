//! Common types shared across Mode API models.
//!
//! This module contains HAL links, pagination blocks and the timestamp type used by
//! multiple resource modules. It does NOT contain resource-specific models.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::{opt_bool_from_bool_or_string, u64_from_string_or_number};

/// One entry of a `_links` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    /// Whether `href` is a URI template (`{?page}` style placeholders).
    #[serde(
        default,
        deserialize_with = "opt_bool_from_bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub templated: Option<bool>,
}

/// `_links` keyed by relation name (`self`, `web`, `report_runs`, ...).
pub type Links = BTreeMap<String, Link>;

/// Pagination block of a paged list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Pagination {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub page: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub per_page: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub count: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_pages: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_count: u64,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// A server timestamp.
///
/// Mode emits RFC 3339 timestamps, but a few legacy fields carry other formats.
/// Those are kept verbatim instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Parsed(DateTime<FixedOffset>),
    Raw(String),
}

impl Timestamp {
    /// The instant in UTC, if the server value was RFC 3339.
    pub fn as_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Parsed(dt) => Some(dt.with_timezone(&Utc)),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let ts: Timestamp = serde_json::from_value(json!("2024-03-01T12:30:00.123Z")).unwrap();
        let utc = ts.as_utc().unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-03-01T12:30:00.123+00:00");
    }

    #[test]
    fn test_timestamp_keeps_unparseable_value() {
        let ts: Timestamp = serde_json::from_value(json!("last tuesday")).unwrap();
        assert_eq!(ts, Timestamp::Raw("last tuesday".to_string()));
        assert_eq!(ts.as_utc(), None);
        assert_eq!(ts.to_string(), "last tuesday");
    }

    #[test]
    fn test_pagination_accepts_string_counts() {
        let p: Pagination = serde_json::from_value(json!({
            "page": "2", "per_page": 30, "count": 30, "total_pages": "3", "total_count": 75
        }))
        .unwrap();
        assert_eq!(p.page, 2);
        assert!(p.has_next_page());
    }

    #[test]
    fn test_links_decode_as_map() {
        let links: Links = serde_json::from_value(json!({
            "self": {"href": "/api/acme/reports/abc"},
            "report_runs": {"href": "/api/acme/reports/abc/runs{?filter}", "templated": true}
        }))
        .unwrap();
        assert_eq!(links["self"].templated, None);
        assert_eq!(links["report_runs"].templated, Some(true));
    }
}
