//! Floating Tags Engine - draggable, bouncing tag pills in WASM
//!
//! Architecture:
//! - core/        - Logging macros, error type
//! - domain/      - Tag definitions and physics constants
//! - systems/     - Body model, per-frame physics, dragging
//! - simulation/  - World orchestration and the frame loop
//! - api/         - Public JS API

// Logging macros must be defined before the modules that use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use crate::core::error::EngineError;
pub use domain::config::{LayoutConfig, PhysicsConfig, TagMetrics};
pub use domain::tags::{default_tags, tags_from_json, TagDef};
pub use simulation::{BodySnapshot, Simulator, TagWorldCore};
pub use systems::tag_body::{TagBody, Vec2};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("floating tags engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Built-in tag list as JSON, for hosts that want to edit it
#[wasm_bindgen]
pub fn default_tags_json() -> String {
    serde_json::to_string(&default_tags()).unwrap_or_else(|_| "[]".to_string())
}

// Re-export main types
pub use api::browser::TagsWidget;
pub use api::wasm::TagWorld;
