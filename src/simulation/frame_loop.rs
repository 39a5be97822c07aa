//! Frame loop - start/stop lifecycle around a `TagWorldCore`
//!
//! At most one frame is ever outstanding. A new one is requested only after
//! the previous step has run and published, so step N's output is always
//! step N+1's input. Global pointer listeners are acquired on grab and
//! released on drop, stop, or teardown mid-drag.
//!
//! The scheduler and the listener registry are traits so the same lifecycle
//! drives `requestAnimationFrame` in the browser and a manual clock in tests.

use crate::core::error::Result;
use crate::domain::tags::TagDef;

use super::TagWorldCore;

/// Opaque id of a requested frame (the `requestAnimationFrame` id in browsers)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Arrange for `Simulator::on_frame` to be called once, next frame.
    fn request_frame(&mut self) -> Result<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Page-wide pointer move/up listeners, held only while dragging so a
/// release outside the widget still ends the drag.
pub trait PointerCapture {
    fn attach(&mut self) -> Result<()>;

    fn detach(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    /// Started, but the container has no usable size yet
    WaitingForSize,
    Running,
}

pub struct Simulator<S: FrameScheduler, P: PointerCapture> {
    world: TagWorldCore,
    scheduler: S,
    capture: P,
    pending: Option<FrameHandle>,
    running: bool,
    capturing: bool,
}

impl<S: FrameScheduler, P: PointerCapture> Simulator<S, P> {
    pub fn new(world: TagWorldCore, scheduler: S, capture: P) -> Self {
        Self {
            world,
            scheduler,
            capture,
            pending: None,
            running: false,
            capturing: false,
        }
    }

    pub fn world(&self) -> &TagWorldCore {
        &self.world
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn capture(&self) -> &P {
        &self.capture
    }

    pub fn state(&self) -> LoopState {
        match (self.running, self.world.is_ready()) {
            (false, _) => LoopState::Stopped,
            (true, false) => LoopState::WaitingForSize,
            (true, true) => LoopState::Running,
        }
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Begin stepping. With no usable size yet the first frame is deferred
    /// until `resize` provides one.
    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        engine_log!("floating tags: loop started");
        self.schedule()
    }

    /// Cancel the outstanding frame, end any drag and drop global listeners.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.world.cancel_drag();
        self.release_capture();
        if self.running {
            self.running = false;
            engine_log!("floating tags: loop stopped after {} frames", self.world.frame());
        }
    }

    /// The scheduled frame fired: step, publish, queue the next one.
    /// Returns whether a step ran.
    pub fn on_frame(&mut self) -> Result<bool> {
        self.pending = None;
        if !self.running {
            return Ok(false);
        }
        let stepped = self.world.step();
        self.schedule()?;
        Ok(stepped)
    }

    pub fn pointer_down(&mut self, index: usize, x: f32, y: f32) -> Result<bool> {
        if !self.world.pointer_down(index, x, y) {
            return Ok(false);
        }
        self.acquire_capture()?;
        Ok(true)
    }

    pub fn pointer_down_at(&mut self, x: f32, y: f32) -> Result<Option<usize>> {
        match self.world.pointer_down_at(x, y) {
            Some(index) => {
                self.acquire_capture()?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.world.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        let released = self.world.pointer_up(x, y);
        self.release_capture();
        released
    }

    /// New container size; may unblock a deferred start.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool> {
        let applied = self.world.resize(width, height);
        if applied {
            engine_log!("floating tags: resized to {}x{}", width, height);
        }
        self.schedule()?;
        Ok(applied)
    }

    pub fn reset(&mut self) -> bool {
        self.release_capture();
        self.world.reset()
    }

    pub fn set_tags(&mut self, tags: Vec<TagDef>) -> Result<()> {
        self.world.set_tags(tags)?;
        self.release_capture();
        Ok(())
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.world.enable_perf_metrics(enabled);
    }

    fn schedule(&mut self) -> Result<()> {
        if !self.running || self.pending.is_some() || !self.world.is_ready() {
            return Ok(());
        }
        match self.scheduler.request_frame() {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.running = false;
                engine_warn!("floating tags: {}", e);
                Err(e)
            }
        }
    }

    fn acquire_capture(&mut self) -> Result<()> {
        if self.capturing {
            return Ok(());
        }
        if let Err(e) = self.capture.attach() {
            // No way to hear the release: don't leave the body stuck
            self.world.cancel_drag();
            return Err(e);
        }
        self.capturing = true;
        Ok(())
    }

    fn release_capture(&mut self) {
        if self.capturing {
            self.capture.detach();
            self.capturing = false;
        }
    }
}

impl<S: FrameScheduler, P: PointerCapture> Drop for Simulator<S, P> {
    fn drop(&mut self) {
        self.stop();
    }
}
