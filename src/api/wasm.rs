use wasm_bindgen::prelude::*;

use crate::domain::config::PhysicsConfig;
use crate::domain::tags::{default_tags, tags_from_json};
use crate::simulation::{PerfStats, TagWorldCore, XorShift32};

/// Headless world for hosts that draw the pills themselves (canvas, WebGL).
/// The host calls `step()` from its own animation loop and reads `snapshot_json()`.
#[wasm_bindgen]
pub struct TagWorld {
    core: TagWorldCore,
}

#[wasm_bindgen]
impl TagWorld {
    /// Create a world. `tags_json` / `config_json` fall back to the built-in
    /// tag list and default constants when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        tags_json: Option<String>,
        config_json: Option<String>,
        seed: u32,
    ) -> Result<TagWorld, JsValue> {
        let tags = match tags_json {
            Some(json) => tags_from_json(&json)?,
            None => default_tags(),
        };
        let config = match config_json {
            Some(json) => PhysicsConfig::from_json(&json)?,
            None => PhysicsConfig::default(),
        };
        let core = TagWorldCore::new(width, height, tags, config, Box::new(XorShift32::new(seed)))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn ready(&self) -> bool { self.core.is_ready() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    /// Step the simulation forward one frame
    pub fn step(&mut self) -> bool {
        self.core.step()
    }

    pub fn pointer_down(&mut self, index: usize, x: f32, y: f32) -> bool {
        self.core.pointer_down(index, x, y)
    }

    /// Hit test then grab; returns the grabbed index or -1
    pub fn pointer_down_at(&mut self, x: f32, y: f32) -> i32 {
        self.core.pointer_down_at(x, y).map_or(-1, |i| i as i32)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.core.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.core.pointer_up(x, y)
    }

    /// Index of the held body or -1
    pub fn held_index(&self) -> i32 {
        self.core.held_index().map_or(-1, |i| i as i32)
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.core.resize(width, height)
    }

    pub fn reset(&mut self) -> bool {
        self.core.reset()
    }

    /// Replace the labels (e.g. after a language switch); recreates bodies
    pub fn set_tags(&mut self, tags_json: String) -> Result<(), JsValue> {
        let tags = tags_from_json(&tags_json)?;
        self.core.set_tags(tags)?;
        Ok(())
    }

    /// Per-body render state as a JSON array
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
