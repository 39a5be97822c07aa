//! TagWorld - the floating tags simulation
//!
//! `TagWorldCore` owns the bounded container and every body in it for the
//! lifetime of one mounted widget. It only mutates state when asked to
//! (step, pointer events, resize); scheduling lives in `frame_loop`.
//!
//! - init/      - body creation, randomness, settings
//! - step/      - the per-frame physics pass
//! - commands/  - pointer interaction, resize and reset
//! - render/    - the published read-only snapshot
//! - perf/      - optional step counters

use crate::core::error::Result;
use crate::domain::config::PhysicsConfig;
use crate::domain::tags::{validate_tags, TagDef};
use crate::systems::drag::DragState;
use crate::systems::tag_body::TagBody;
use crate::systems::tag_physics::Bounds;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
pub mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/pointer.rs"]
mod pointer;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/snapshot.rs"]
mod snapshot;
pub mod frame_loop;

pub use frame_loop::{FrameHandle, FrameScheduler, LoopState, PointerCapture, Simulator};
pub use perf_stats::PerfStats;
pub use random::{ConstantRandom, RandomSource, XorShift32};
pub use snapshot::BodySnapshot;

/// The simulation world
pub struct TagWorldCore {
    config: PhysicsConfig,
    tags: Vec<TagDef>,
    bounds: Bounds,
    bodies: Vec<TagBody>,
    drag: Option<DragState>,
    rng: Box<dyn RandomSource>,

    // State
    /// Bodies exist and stepping is allowed
    ready: bool,
    frame: u64,

    // Published view for the renderer
    snapshot: Vec<BodySnapshot>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl TagWorldCore {
    /// Create a world for the given container size.
    ///
    /// Config and labels are validated here; nothing fails later. With a
    /// degenerate size the world waits (no bodies, `step` is a no-op) until
    /// `resize` reports a usable one.
    pub fn new(
        width: f32,
        height: f32,
        tags: Vec<TagDef>,
        config: PhysicsConfig,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self> {
        config.validate()?;
        validate_tags(&tags)?;

        let mut world = TagWorldCore {
            config,
            tags,
            bounds: Bounds::new(width, height),
            bodies: Vec::new(),
            drag: None,
            rng,
            ready: false,
            frame: 0,
            snapshot: Vec::new(),
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        };

        if world.bounds.is_valid() {
            init::rebuild(&mut world);
        } else {
            engine_log!("floating tags: waiting for a container size (got {}x{})", width, height);
        }
        Ok(world)
    }

    /// `new` with the built-in xorshift generator.
    pub fn with_seed(
        width: f32,
        height: f32,
        tags: Vec<TagDef>,
        config: PhysicsConfig,
        seed: u32,
    ) -> Result<Self> {
        Self::new(width, height, tags, config, Box::new(XorShift32::new(seed)))
    }

    pub fn width(&self) -> f32 { self.bounds.width }

    pub fn height(&self) -> f32 { self.bounds.height }

    pub fn bounds(&self) -> Bounds { self.bounds }

    pub fn frame(&self) -> u64 { self.frame }

    /// True once bodies exist and steps advance them
    pub fn is_ready(&self) -> bool { self.ready }

    pub fn bodies(&self) -> &[TagBody] { &self.bodies }

    pub fn body(&self, index: usize) -> Option<&TagBody> { self.bodies.get(index) }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn tags(&self) -> &[TagDef] { &self.tags }

    pub fn config(&self) -> &PhysicsConfig {
        settings::config(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) -> bool {
        step::step(self)
    }

    // === POINTER API ===

    /// Index of the top-most body under (x, y)
    pub fn body_at(&self, x: f32, y: f32) -> Option<usize> {
        pointer::body_at(self, x, y)
    }

    /// Grab body `index` with the pointer at (x, y). Returns false when the
    /// index is unknown, the world is not ready, or another body is held.
    pub fn pointer_down(&mut self, index: usize, x: f32, y: f32) -> bool {
        pointer::pointer_down(self, index, x, y)
    }

    /// Hit test and grab in one call
    pub fn pointer_down_at(&mut self, x: f32, y: f32) -> Option<usize> {
        pointer::pointer_down_at(self, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        pointer::pointer_move(self, x, y)
    }

    /// Release the held body, if any. Safe to call anywhere on the page.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        pointer::pointer_up(self, x, y)
    }

    pub fn cancel_drag(&mut self) -> bool {
        pointer::cancel_drag(self)
    }

    pub fn held_index(&self) -> Option<usize> {
        self.drag.map(|d| d.index)
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    // === CONTAINER API ===

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        commands::resize(self, width, height)
    }

    pub fn reset(&mut self) -> bool {
        commands::reset(self)
    }

    pub fn set_tags(&mut self, tags: Vec<TagDef>) -> Result<()> {
        commands::set_tags(self, tags)
    }

    // === RENDER API ===

    /// State as of the last publish (step, pointer move, resize)
    pub fn snapshot(&self) -> &[BodySnapshot] {
        &self.snapshot
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot)
    }
}

// Snapshot maintenance
impl TagWorldCore {
    fn rebuild_snapshot(&mut self) {
        self.snapshot = self
            .bodies
            .iter()
            .zip(self.tags.iter())
            .enumerate()
            .map(|(i, (body, tag))| BodySnapshot::new(i, tag, body))
            .collect();
    }

    fn refresh_snapshot(&mut self) {
        for (snap, body) in self.snapshot.iter_mut().zip(self.bodies.iter()) {
            snap.update(body);
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
