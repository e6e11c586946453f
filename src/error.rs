//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! None of these are fatal to the page: the loader turns them into an
//! inline message, the web layer logs the rest.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network / fetch errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx response for the stats document
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Statistics were already installed into the store
    #[error("Statistics already loaded")]
    AlreadyLoaded,

    /// DOM binding errors (missing element, failed JS call)
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DashboardError::Dom(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<DashboardError> for wasm_bindgen::JsValue {
    fn from(err: DashboardError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
