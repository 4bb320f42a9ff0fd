//! REST calls to the listing and chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Transport` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` and logs the failure before handing
//! it back. There are no retries and no timeouts; views decide what the user
//! sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatResponse, NewProperty, Property};
use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;

pub const PROPERTIES_PATH: &str = "/properties";
pub const CHAT_PATH: &str = "/chat";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (server unreachable, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    HttpStatus { status: u16 },
    /// A 2xx body did not decode into the expected type.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::HttpStatus { status })
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the raw property collection from `GET /properties`.
///
/// The body is returned unparsed; see
/// [`parse_property_collection`](super::types::parse_property_collection).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is not 2xx.
pub async fn list_properties(config: &ClientConfig) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(PROPERTIES_PATH);
        let result: Result<serde_json::Value, ApiError> = match gloo_net::http::Request::get(&url).send().await {
            Ok(resp) => read_json(resp).await,
            Err(e) => Err(ApiError::Transport(e.to_string())),
        };
        result.inspect_err(|e| leptos::logging::warn!("Error fetching properties: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(not_available())
    }
}

/// Create a property via `POST /properties`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or the
/// created record cannot be decoded.
pub async fn create_property(config: &ClientConfig, input: &NewProperty) -> Result<Property, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(PROPERTIES_PATH);
        let result: Result<Property, ApiError> = async {
            let resp = gloo_net::http::Request::post(&url)
                .json(input)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        .await;
        result.inspect_err(|e| leptos::logging::warn!("Error creating property: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, input);
        Err(not_available())
    }
}

/// Send one chat turn via `POST /chat`.
///
/// `session_id` is `None` until the backend has assigned one.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or the
/// reply cannot be decoded.
pub async fn send_chat_message(
    config: &ClientConfig,
    text: &str,
    session_id: Option<&str>,
) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(CHAT_PATH);
        let body = ChatRequest { message: text, session_id };
        let result: Result<ChatResponse, ApiError> = async {
            let resp = gloo_net::http::Request::post(&url)
                .json(&body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        .await;
        result.inspect_err(|e| leptos::logging::warn!("Error sending chat message: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, text, session_id);
        Err(not_available())
    }
}
