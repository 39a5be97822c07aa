use super::vec2::Vec2;

/// Tag body - one pill in the cloud
#[derive(Clone, Debug, PartialEq)]
pub struct TagBody {
    // === Physics State ===
    /// Center position (pixels)
    pub pos: Vec2,
    /// Velocity vector (pixels per frame)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per frame)
    pub angular_vel: f32,
    /// Pointer-controlled; skipped by the physics step
    pub held: bool,

    // === Shape (fixed after creation) ===
    half_width: f32,
    half_height: f32,
}

impl TagBody {
    /// Create a pill of full size `width` x `height` centered at (x, y), at rest.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            held: false,
            half_width: width * 0.5,
            half_height: height * 0.5,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    /// World point in the pill's own frame (origin at center, unrotated)
    #[inline]
    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        (world - self.pos).rotated(-self.angle)
    }

    /// Hit test against the rotated rectangle the renderer draws
    pub fn contains_point(&self, point: Vec2) -> bool {
        let local = self.world_to_local(point);
        local.x.abs() <= self.half_width && local.y.abs() <= self.half_height
    }

    /// Stop all motion (linear and angular)
    pub fn halt(&mut self) {
        self.velocity = Vec2::zero();
        self.angular_vel = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn extents_are_half_of_full_size() {
        let body = TagBody::new(10.0, 20.0, 150.0, 40.0);
        assert_eq!(body.half_width(), 75.0);
        assert_eq!(body.half_height(), 20.0);
        assert_eq!(body.width(), 150.0);
        assert!(!body.held);
        assert_eq!(body.velocity, Vec2::zero());
    }

    #[test]
    fn hit_test_follows_rotation() {
        let flat = TagBody::new(100.0, 100.0, 100.0, 20.0);
        assert!(flat.contains_point(Vec2::new(140.0, 100.0)));
        assert!(!flat.contains_point(Vec2::new(100.0, 140.0)));

        // Quarter turn: the long axis is now vertical
        let upright = flat.clone().with_angle(FRAC_PI_2);
        assert!(!upright.contains_point(Vec2::new(140.0, 100.0)));
        assert!(upright.contains_point(Vec2::new(100.0, 140.0)));
    }

    #[test]
    fn world_to_local_undoes_pose() {
        let body = TagBody::new(50.0, 60.0, 80.0, 30.0).with_angle(0.7);
        let p = body.pos + Vec2::new(12.0, -5.0).rotated(0.7);
        let back = body.world_to_local(p);
        assert!((back.x - 12.0).abs() < 1e-4);
        assert!((back.y + 5.0).abs() < 1e-4);
    }
}
