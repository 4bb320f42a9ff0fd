//! Wire DTOs for the listing and chat backend.
//!
//! DESIGN
//! ======
//! The backend owns `Property`; the client only reads it back and creates new
//! ones. Listing responses go through `parse_property_collection`, which is the
//! one place that decides which collection shapes are accepted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Property identifier. The backend issues UUID strings, older fixtures use
/// integers; both are carried through untouched and rendered as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A listed property as returned by `GET /properties`.
///
/// Everything except `id` is optional so a partially filled record still
/// renders with placeholder text instead of dropping the whole listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,
    /// ISO-8601 creation time.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /properties`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub address: String,
    pub description: String,
    pub specifications: String,
}

/// A property surfaced by the agent for one chat turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecommendation {
    pub id: PropertyId,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub specifications: Option<String>,
}

/// Body of `POST /chat`. `session_id` serializes as `null` until the backend
/// has assigned one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: Option<&'a str>,
}

/// Response of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub session_id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub properties: Vec<PropertyRecommendation>,
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The listing body matched neither accepted collection shape.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected a property array or an object with a `properties` array, got {found}")]
    UnexpectedShape { found: String },
}

/// Resolve a `GET /properties` body into property records.
///
/// Accepted shapes:
/// - a bare array of properties
/// - an object wrapping that array under `properties`
///
/// Array elements that are not property records are skipped with a warning.
///
/// # Errors
///
/// Returns [`ShapeError::UnexpectedShape`] for any other top-level value.
pub fn parse_property_collection(value: Value) -> Result<Vec<Property>, ShapeError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("properties") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ShapeError::UnexpectedShape {
                    found: format!("`properties` as {}", json_kind(&other)),
                });
            }
            None => {
                return Err(ShapeError::UnexpectedShape { found: "object without `properties`".to_owned() });
            }
        },
        other => return Err(ShapeError::UnexpectedShape { found: json_kind(&other).to_owned() }),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Property>(item) {
            Ok(property) => Some(property),
            Err(e) => {
                leptos::logging::warn!("skipping malformed property record: {e}");
                None
            }
        })
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
