//! Backend location for API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the configured base URL into a `<meta>` tag in the HTML
//! shell. During SSR the same value is provided as Leptos context; after
//! hydration the client reads it back from the document once at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `name` of the shell `<meta>` tag carrying the backend base URL.
pub const API_URL_META_NAME: &str = "leasa-api-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Build a config from a base URL. Blank input falls back to
    /// [`DEFAULT_API_URL`]; trailing slashes are dropped.
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL for a backend path such as `/chat`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Read the config from the shell `<meta>` tag.
    /// Returns the default outside the browser or when the tag is missing.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_URL_META_NAME}\"]");
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .map_or_else(Self::default, |url| Self::new(&url))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
