use wasm_bindgen::prelude::*;

/// Counters for the most recent step (all zero while metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) bodies_stepped: u32,
    pub(super) bodies_held: u32,
    pub(super) wall_contacts: u32,
    pub(super) floor_contacts: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_stepped(&self) -> u32 { self.bodies_stepped }
    #[wasm_bindgen(getter)]
    pub fn bodies_held(&self) -> u32 { self.bodies_held }
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
