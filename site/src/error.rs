//! Errors raised while mounting the page behaviors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use page::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A required element of the page contract is absent.
    #[error("required element {0} not found")]
    MissingElement(&'static str),
    /// Not running in a document context (e.g. inside a worker).
    #[error("no {0} available")]
    NoBrowser(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
