//! Error types for page wiring and configuration.
//!
//! None of these reach the user. Each unit's mount returns a `PageError`
//! so the entry point can log it and keep mounting the remaining units.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`crate::config::PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded config block is not valid JSON for [`crate::config::PageConfig`].
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The typewriter text is empty after trimming.
    #[error("typewriter text must not be empty")]
    EmptyText,
}

/// Failure while wiring a behavior unit to the document.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No `window` or `document` is available.
    #[error("browser document unavailable")]
    NoDocument,
    /// A required element is absent from the markup.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A browser API call rejected.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The embedded configuration could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
