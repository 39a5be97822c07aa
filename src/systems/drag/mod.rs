//! Drag - pointer control of a single held body
//!
//! FREE -> HELD on grab, HELD -> FREE on release. While held, the body sits
//! exactly at `pointer - offset`; on release it is thrown with a velocity
//! estimated from the last two pointer samples.

use crate::domain::config::PhysicsConfig;
use crate::systems::tag_body::{TagBody, Vec2};

/// Bookkeeping for the body currently under the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Index of the held body
    pub index: usize,
    /// Pointer position minus body center at grab time
    pub offset: Vec2,
    pub prev_pointer: Vec2,
    pub last_pointer: Vec2,
}

impl DragState {
    /// Take hold of `body` at `pointer`; clears any in-flight motion.
    pub fn grab(index: usize, body: &mut TagBody, pointer: Vec2) -> Self {
        body.held = true;
        body.halt();
        Self {
            index,
            offset: pointer - body.pos,
            prev_pointer: pointer,
            last_pointer: pointer,
        }
    }

    /// Move the held body with the pointer, no smoothing.
    pub fn follow(&mut self, body: &mut TagBody, pointer: Vec2) {
        body.pos = pointer - self.offset;
        self.prev_pointer = self.last_pointer;
        self.last_pointer = pointer;
    }

    /// (velocity, angular velocity) to throw the body with.
    pub fn release_velocity(&self, config: &PhysicsConfig) -> (Vec2, f32) {
        let velocity = (self.last_pointer - self.prev_pointer) * config.release_scale;
        (velocity, velocity.x * config.release_spin)
    }

    /// Let go: the body becomes free with the estimated throw velocity.
    pub fn release(self, body: &mut TagBody, config: &PhysicsConfig) {
        let (velocity, angular_vel) = self.release_velocity(config);
        body.held = false;
        body.velocity = velocity;
        body.angular_vel = angular_vel;
    }

    /// Let go without throwing (teardown mid-drag).
    pub fn cancel(self, body: &mut TagBody) {
        body.held = false;
        body.halt();
    }
}
