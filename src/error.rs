//! Error type for the browser adapter and config loading.
//!
//! ERROR HANDLING
//! ==============
//! A missing element is not an error: lookups return `Option` and the matching
//! behavior is skipped. `UiError` covers failures of calls that should work,
//! such as a rejected `setAttribute` or a malformed config block. Event
//! handlers log these and carry on with the next action.

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("dom {op} failed: {detail}")]
    Dom { op: &'static str, detail: String },
    #[error("storage write failed for {key}: {detail}")]
    Storage { key: String, detail: String },
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "hydrate")]
impl UiError {
    /// Wrap a rejected JS call.
    pub(crate) fn dom(op: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Dom { op, detail: format!("{err:?}") }
    }
}
