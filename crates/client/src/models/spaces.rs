//! Space (collection) models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::common::Links;
use crate::serde_helpers::{opt_bool_from_bool_or_string, u64_from_string_or_number};

/// Kind of space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceType {
    Private,
    Custom,
    /// A value this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => write!(f, "private"),
            Self::Custom => write!(f, "custom"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A Mode space, the container reports live in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub token: String,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub space_type: SpaceType,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub restricted: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub free_default: Option<bool>,
    #[serde(
        rename = "viewable?",
        default,
        deserialize_with = "opt_bool_from_bool_or_string"
    )]
    pub viewable: Option<bool>,
    #[serde(
        rename = "viewed?",
        default,
        deserialize_with = "opt_bool_from_bool_or_string"
    )]
    pub viewed: Option<bool>,
    pub default_access_level: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Whether [`SpaceClient::list`](crate::client::SpaceClient::list) returns every space
/// or only custom ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceFilter {
    #[default]
    Custom,
    All,
}

impl SpaceFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::All => "all",
        }
    }
}

/// Fields of a space change. Unset fields are not serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpaceFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_space_question_mark_fields_and_unknown_type() {
        let space: Space = serde_json::from_value(json!({
            "token": "sp1",
            "id": 7,
            "name": "Marketing",
            "space_type": "shared_team",
            "viewable?": "true",
            "viewed?": false
        }))
        .unwrap();

        assert_eq!(space.space_type, SpaceType::Unknown);
        assert_eq!(space.viewable, Some(true));
        assert_eq!(space.viewed, Some(false));
        assert_eq!(space.restricted, None);
    }

    #[test]
    fn test_space_fields_omit_unset() {
        let fields = SpaceFields {
            description: Some("Q3 work"),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"description": "Q3 work"})
        );
    }
}
