use crate::domain::config::PhysicsConfig;
use crate::systems::tag_body::TagBody;

use super::Bounds;

/// Which container edges a body touched during one step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub floor: bool,
    pub top: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.floor || self.top
    }

    pub fn count(&self) -> u32 {
        self.left as u32 + self.right as u32 + self.floor as u32 + self.top as u32
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Inside,
    Low,
    High,
}

/// Clamp one axis so [pos - half, pos + half] lies in [0, extent].
/// A body larger than the extent is centered instead.
fn clamp_axis(pos: &mut f32, half: f32, extent: f32) -> Side {
    let side = if *pos - half < 0.0 {
        Side::Low
    } else if *pos + half > extent {
        Side::High
    } else {
        Side::Inside
    };

    if half * 2.0 >= extent {
        if side != Side::Inside {
            *pos = extent * 0.5;
        }
        return side;
    }

    match side {
        Side::Low => *pos = half,
        Side::High => *pos = extent - half,
        Side::Inside => {}
    }
    side
}

/// Push a body back inside the container without touching its velocity.
/// Used after resizes and right after creation.
pub fn clamp_into_bounds(body: &mut TagBody, bounds: Bounds) -> bool {
    let (hw, hh) = (body.half_width(), body.half_height());
    let sx = clamp_axis(&mut body.pos.x, hw, bounds.width);
    let sy = clamp_axis(&mut body.pos.y, hh, bounds.height);
    sx != Side::Inside || sy != Side::Inside
}

/// Wall response: clamp, reflect with restitution, add spin.
pub fn resolve_walls(body: &mut TagBody, bounds: Bounds, config: &PhysicsConfig) -> WallContacts {
    let mut contacts = WallContacts::default();
    let (hw, hh) = (body.half_width(), body.half_height());

    match clamp_axis(&mut body.pos.x, hw, bounds.width) {
        Side::Inside => {}
        side => {
            contacts.left = side == Side::Low;
            contacts.right = side == Side::High;
            body.velocity.x = -body.velocity.x * config.bounce;
            body.angular_vel += body.velocity.x * config.wall_spin;
        }
    }

    match clamp_axis(&mut body.pos.y, hh, bounds.height) {
        Side::Inside => {}
        Side::High => {
            contacts.floor = true;
            body.velocity.y = -body.velocity.y * config.bounce;
            // Bounces too small to see: come to rest on the floor
            if body.velocity.y.abs() < config.rest_speed {
                body.velocity.y = 0.0;
            }
            // Sliding friction, then spin from what is left
            body.velocity.x *= config.floor_friction;
            body.angular_vel += body.velocity.x * config.floor_spin;
        }
        Side::Low => {
            contacts.top = true;
            body.velocity.y = -body.velocity.y * config.bounce;
            body.angular_vel += body.velocity.x * config.wall_spin;
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::tag_body::Vec2;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 400.0)
    }

    #[test]
    fn right_wall_reflects_with_restitution_and_spins() {
        let config = PhysicsConfig::default();
        let mut body = TagBody::new(790.0, 200.0, 100.0, 40.0);
        body.velocity = Vec2::new(10.0, 0.0);

        let contacts = resolve_walls(&mut body, bounds(), &config);

        assert!(contacts.right && !contacts.left);
        assert_eq!(body.pos.x, 750.0);
        assert!((body.velocity.x + 7.0).abs() < 1e-5);
        assert!((body.angular_vel + 0.7).abs() < 1e-5);
    }

    #[test]
    fn floor_contact_damps_horizontal_motion() {
        let config = PhysicsConfig::default();
        let mut body = TagBody::new(400.0, 395.0, 100.0, 40.0);
        body.velocity = Vec2::new(5.0, 12.0);

        let contacts = resolve_walls(&mut body, bounds(), &config);

        assert!(contacts.floor);
        assert_eq!(body.pos.y, 380.0);
        assert!((body.velocity.y + 8.4).abs() < 1e-5);
        assert!((body.velocity.x - 4.0).abs() < 1e-5);
        assert!((body.angular_vel - 0.2).abs() < 1e-5);
    }

    #[test]
    fn tiny_floor_bounce_comes_to_rest() {
        let config = PhysicsConfig::default();
        let mut body = TagBody::new(400.0, 381.0, 100.0, 40.0);
        body.velocity = Vec2::new(0.0, 0.6);

        resolve_walls(&mut body, bounds(), &config);

        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.pos.y, 380.0);
    }

    #[test]
    fn left_wall_reflects_with_restitution_and_spins() {
        let config = PhysicsConfig::default();
        let mut body = TagBody::new(10.0, 200.0, 100.0, 40.0);
        body.velocity = Vec2::new(-10.0, 0.0);

        let contacts = resolve_walls(&mut body, bounds(), &config);

        assert!(contacts.left && !contacts.right);
        assert_eq!(body.pos.x, 50.0);
        assert!((body.velocity.x - 7.0).abs() < 1e-5);
        assert!((body.angular_vel - 0.7).abs() < 1e-5);
    }

    #[test]
    fn ceiling_contact_reflects_downwards() {
        let config = PhysicsConfig::default();
        let mut body = TagBody::new(400.0, 5.0, 100.0, 40.0);
        body.velocity = Vec2::new(4.0, -10.0);

        let contacts = resolve_walls(&mut body, bounds(), &config);

        assert_eq!(contacts, WallContacts { top: true, ..WallContacts::default() });
        assert_eq!(body.pos.y, 20.0);
        assert!((body.velocity.y - 7.0).abs() < 1e-5);
        // Horizontal motion is untouched; spin comes from it
        assert_eq!(body.velocity.x, 4.0);
        assert!((body.angular_vel - 0.4).abs() < 1e-5);
    }

    #[test]
    fn oversized_body_is_centered() {
        let mut body = TagBody::new(10.0, 200.0, 300.0, 40.0);
        assert!(clamp_into_bounds(&mut body, Bounds::new(200.0, 400.0)));
        assert_eq!(body.pos.x, 100.0);
    }

    #[test]
    fn clamp_leaves_inside_bodies_alone() {
        let mut body = TagBody::new(400.0, 200.0, 100.0, 40.0);
        body.velocity = Vec2::new(3.0, 3.0);
        assert!(!clamp_into_bounds(&mut body, bounds()));
        assert_eq!(body.pos, Vec2::new(400.0, 200.0));
        assert_eq!(body.velocity, Vec2::new(3.0, 3.0));
    }
}
