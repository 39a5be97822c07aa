//! TagPhysics - per-frame integration for free (not held) tag bodies
//!
//! Deliberately tiny: no body-body contacts, no impulse solver.
//! - Constant per-frame gravity, horizontal and angular damping.
//! - Explicit Euler integration of position and rotation.
//! - Wall response against the container: clamp, reflect with restitution,
//!   add a little spin so bounces look physical.
//!
//! `step_body` is a pure function of (body, bounds, config) so it can be
//! unit tested without a world or a renderer.

mod collision;
mod integrate;

pub use collision::{clamp_into_bounds, resolve_walls, WallContacts};
pub use integrate::step_body;

/// The container a world simulates in (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero, negative or non-finite sizes cannot host a simulation
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
