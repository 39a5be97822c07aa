//! Engine error types
//!
//! Everything here is raised at construction or at the JS boundary.
//! Stepping the simulation never fails.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A physics constant is outside its allowed range
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Tag at `index` has no visible text
    #[error("tag {index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("tag list JSON could not be parsed: {0}")]
    InvalidTagJson(String),

    #[error("config JSON could not be parsed: {0}")]
    InvalidConfigJson(String),

    /// The frame scheduler refused to queue a callback
    #[error("frame scheduler failed: {0}")]
    Scheduler(String),

    /// A DOM call failed while mounting or wiring the widget
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<EngineError> for JsValue {
    fn from(e: EngineError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Render a thrown JS value as text for `Scheduler` / `Dom` errors.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
