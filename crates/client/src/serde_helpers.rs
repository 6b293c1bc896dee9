//! Serde helpers for Mode's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Accept `"true"`/`"false"` strings where the API sometimes quotes booleans.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Mode returns ids and counts as `"123"` strings or as `123` numbers depending on the
//!   endpoint and API revision.
//! - Errors are generic parse errors; the field path is attached by the decoder.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

impl U64OrString {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Self::U64(v) => Ok(v),
            Self::I64(v) => u64::try_from(v).map_err(E::custom),
            Self::String(s) => s.trim().parse::<u64>().map_err(E::custom),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Bool(bool),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    U64OrString::deserialize(deserializer)?.into_u64()
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<U64OrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(U64OrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.into_u64().map(Some),
    }
}

pub fn opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::String(s) => s,
        Scalar::Bool(b) => b.to_string(),
        Scalar::U64(n) => n.to_string(),
        Scalar::I64(n) => n.to_string(),
        Scalar::F64(n) => n.to_string(),
    }))
}

pub fn opt_bool_from_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(b)),
        Some(Scalar::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            "" => Ok(None),
            other => Err(D::Error::custom(format!("expected a boolean, got {other:?}"))),
        },
        Some(Scalar::U64(n)) => Ok(Some(n != 0)),
        Some(Scalar::I64(n)) => Ok(Some(n != 0)),
        Some(Scalar::F64(_)) => Err(D::Error::custom("expected a boolean, got a float")),
    }
}
