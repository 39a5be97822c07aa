//! JS-facing surface
//!
//! - wasm    - `TagWorld`, a headless world the host steps and draws
//! - browser - `TagsWidget`, DOM pills with a built-in animation loop

pub mod browser;
pub mod wasm;
