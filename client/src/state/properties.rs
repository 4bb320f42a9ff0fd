//! Property listing state.
//!
//! DESIGN
//! ======
//! The listing is fetched once per mount. A body in an unknown shape is a
//! backend contract problem, not a user-facing failure: it is logged and the
//! view shows the empty state.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use crate::net::api::ApiError;
use crate::net::types::{Property, parse_property_collection};

pub const FETCH_FAILED_TEXT: &str = "Failed to fetch properties. Please try again later.";

/// What the listing page is showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PropertyListState {
    #[default]
    Loading,
    Error(String),
    Empty,
    Populated(Vec<Property>),
}

impl PropertyListState {
    /// Settle the view from the result of `list_properties`.
    pub fn from_fetch(result: Result<serde_json::Value, ApiError>) -> Self {
        match result {
            Ok(body) => Self::from_properties(properties_or_empty(body)),
            Err(_) => Self::Error(FETCH_FAILED_TEXT.to_owned()),
        }
    }

    pub fn from_properties(properties: Vec<Property>) -> Self {
        if properties.is_empty() { Self::Empty } else { Self::Populated(properties) }
    }
}

/// Parse a listing body, degrading an unknown shape to an empty list.
///
/// Debug builds log the shape problem as an error so contract drift is loud
/// during development; release builds log a warning.
pub fn properties_or_empty(body: serde_json::Value) -> Vec<Property> {
    match parse_property_collection(body) {
        Ok(properties) => properties,
        Err(e) => {
            if cfg!(debug_assertions) {
                leptos::logging::error!("unexpected property listing: {e}");
            } else {
                leptos::logging::warn!("unexpected property listing: {e}");
            }
            Vec::new()
        }
    }
}
