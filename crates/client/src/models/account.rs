//! Account (user or organization) models.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::models::common::{Links, Timestamp};
use crate::serde_helpers::{
    opt_bool_from_bool_or_string, opt_u64_from_string_or_number, u64_from_string_or_number,
};

/// A Mode user or organization account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub token: String,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub email_verified: Option<bool>,
    /// `true` for a user account, `false` for an organization.
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub user: Option<bool>,
    pub avatar: Option<Avatar>,
    pub created_at: Option<Timestamp>,
    pub plan_code: Option<String>,
    pub membership_type: Option<String>,
    pub trial_state: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub dataset_size_limit_mb: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub query_run_size_limit_mb: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub private_definition_count: Option<u64>,
    pub private_definition_limit: Option<DefinitionLimit>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub space_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub data_source_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub organizations_count: Option<u64>,
    #[serde(default)]
    pub authorized_domains: Vec<String>,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Account {
    pub fn is_organization(&self) -> bool {
        self.user == Some(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub url: Option<String>,
    pub initials: Option<String>,
    pub color: Option<String>,
}

/// Cap on private definitions: a number, or the string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionLimit {
    Limited(u64),
    Unlimited,
}

impl DefinitionLimit {
    /// Whether `count` more definitions fit under the limit.
    pub fn allows(&self, count: u64) -> bool {
        match self {
            Self::Limited(limit) => count <= *limit,
            Self::Unlimited => true,
        }
    }
}

impl fmt::Display for DefinitionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}

impl<'de> Deserialize<'de> for DefinitionLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::Limited(n)),
            Raw::Text(s) if s.eq_ignore_ascii_case("unlimited") => Ok(Self::Unlimited),
            Raw::Text(s) => s.trim().parse().map(Self::Limited).map_err(|_| {
                D::Error::custom(format!("expected a number or \"unlimited\", got {s:?}"))
            }),
        }
    }
}

impl Serialize for DefinitionLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Limited(n) => serializer.serialize_u64(*n),
            Self::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}
