use crate::domain::config::PhysicsConfig;
use crate::systems::tag_body::TagBody;

use super::collision::{resolve_walls, WallContacts};
use super::Bounds;

/// Advance one free body by one frame.
///
/// Held bodies are returned untouched: the pointer owns their position.
pub fn step_body(body: &TagBody, bounds: Bounds, config: &PhysicsConfig) -> (TagBody, WallContacts) {
    let mut next = body.clone();
    if next.held {
        return (next, WallContacts::default());
    }

    // Forces and damping (vy is left to gravity)
    next.velocity.y += config.gravity;
    next.velocity.x *= config.friction;
    next.angular_vel *= config.angular_friction;

    // Integrate
    next.pos = next.pos + next.velocity;
    next.angle += next.angular_vel;

    let contacts = resolve_walls(&mut next, bounds, config);

    if next.angular_vel.abs() < config.angular_epsilon {
        next.angular_vel = 0.0;
    }

    (next, contacts)
}
