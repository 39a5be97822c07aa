//! Physics and layout constants
//!
//! All values are per-frame quantities (pixels per frame, radians per frame),
//! matching a ~60 Hz animation-frame loop. The step is not scaled by wall-clock
//! delta, so a faster display runs the simulation faster.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Size rules for turning a label into a pill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagMetrics {
    /// Pixels of width per label character
    pub char_width: f32,
    /// Extra width added around the text
    pub padding: f32,
    /// Width floor so short labels stay legible
    pub min_width: f32,
    pub height: f32,
}

impl TagMetrics {
    pub const fn regular() -> Self {
        Self { char_width: 10.0, padding: 0.0, min_width: 100.0, height: 40.0 }
    }

    pub const fn compact() -> Self {
        Self { char_width: 8.0, padding: 0.0, min_width: 80.0, height: 34.0 }
    }

    /// Full (width, height) for a label of `chars` characters.
    pub fn size_for(&self, chars: usize) -> (f32, f32) {
        let width = (chars as f32 * self.char_width + self.padding).max(self.min_width);
        (width, self.height)
    }
}

impl Default for TagMetrics {
    fn default() -> Self {
        Self::regular()
    }
}

/// Initial grid placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub columns: u32,
    /// Center of the first tag
    pub origin_x: f32,
    pub origin_y: f32,
    /// Horizontal distance between column centers
    pub spacing_x: f32,
    /// Vertical distance between rows
    pub row_offset: f32,
    /// Max random offset in each axis (0 disables)
    pub jitter: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            origin_x: 100.0,
            origin_y: 50.0,
            spacing_x: 150.0,
            row_offset: 70.0,
            jitter: 6.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Added to vy every frame
    pub gravity: f32,
    /// Horizontal damping per frame
    pub friction: f32,
    /// Restitution on wall contact
    pub bounce: f32,
    pub angular_friction: f32,
    /// Extra vx damping on floor contact
    pub floor_friction: f32,
    /// Spin added per unit of reflected vx on side/top walls
    pub wall_spin: f32,
    /// Spin added per unit of vx on floor contact
    pub floor_spin: f32,
    /// |angular velocity| below this snaps to zero
    pub angular_epsilon: f32,
    /// Reflected floor speed below this snaps vy to zero
    pub rest_speed: f32,
    /// Pointer delta to velocity factor on release
    pub release_scale: f32,
    /// Release vx to angular velocity factor
    pub release_spin: f32,
    /// Worlds narrower than this use `compact_metrics`
    pub compact_breakpoint: f32,
    pub metrics: TagMetrics,
    pub compact_metrics: TagMetrics,
    pub layout: LayoutConfig,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            friction: 0.995,
            bounce: 0.7,
            angular_friction: 0.99,
            floor_friction: 0.8,
            wall_spin: 0.1,
            floor_spin: 0.05,
            angular_epsilon: 0.01,
            rest_speed: 1.0,
            release_scale: 0.3,
            release_spin: 0.02,
            compact_breakpoint: 768.0,
            metrics: TagMetrics::regular(),
            compact_metrics: TagMetrics::compact(),
            layout: LayoutConfig::default(),
        }
    }
}

impl PhysicsConfig {
    /// Parse a (possibly partial) config object; missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PhysicsConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfigJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Metrics to use for a world of the given width.
    pub fn metrics_for_width(&self, width: f32) -> &TagMetrics {
        if width < self.compact_breakpoint {
            &self.compact_metrics
        } else {
            &self.metrics
        }
    }

    /// Reject values that would make the simulation gain energy or never settle.
    pub fn validate(&self) -> Result<()> {
        unit_open("friction", self.friction)?;
        unit_open("bounce", self.bounce)?;
        unit_open("angular_friction", self.angular_friction)?;
        unit_open("floor_friction", self.floor_friction)?;
        unit_open("release_scale", self.release_scale)?;

        non_negative("gravity", self.gravity)?;
        non_negative("wall_spin", self.wall_spin)?;
        non_negative("floor_spin", self.floor_spin)?;
        non_negative("release_spin", self.release_spin)?;
        non_negative("compact_breakpoint", self.compact_breakpoint)?;
        non_negative("layout.origin_x", self.layout.origin_x)?;
        non_negative("layout.origin_y", self.layout.origin_y)?;
        non_negative("layout.spacing_x", self.layout.spacing_x)?;
        non_negative("layout.row_offset", self.layout.row_offset)?;
        non_negative("layout.jitter", self.layout.jitter)?;
        positive("angular_epsilon", self.angular_epsilon)?;

        if !(self.rest_speed.is_finite() && self.rest_speed > self.gravity * self.bounce) {
            return Err(EngineError::InvalidConfig {
                field: "rest_speed",
                value: self.rest_speed,
                reason: "must exceed gravity * bounce or resting bodies jitter forever",
            });
        }

        for m in [&self.metrics, &self.compact_metrics] {
            non_negative("metrics.char_width", m.char_width)?;
            non_negative("metrics.padding", m.padding)?;
            positive("metrics.min_width", m.min_width)?;
            positive("metrics.height", m.height)?;
        }

        if self.layout.columns == 0 {
            return Err(EngineError::InvalidConfig {
                field: "layout.columns",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn unit_open(field: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig { field, value, reason: "must be within (0, 1)" })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig { field, value, reason: "must be finite and >= 0" })
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig { field, value, reason: "must be finite and > 0" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PhysicsConfig::default().validate().is_ok());
    }

    #[test]
    fn bounce_outside_unit_interval_is_rejected() {
        let config = PhysicsConfig { bounce: 1.2, ..PhysicsConfig::default() };
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "bounce"),
            other => panic!("expected bounce error, got {:?}", other),
        }

        let config = PhysicsConfig { friction: 1.0, ..PhysicsConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rest_speed_must_beat_gravity_bounce_product() {
        let config = PhysicsConfig { rest_speed: 0.3, ..PhysicsConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_layout_is_rejected() {
        let cases: [(&str, fn(&mut LayoutConfig)); 4] = [
            ("layout.origin_x", |l| l.origin_x = f32::INFINITY),
            ("layout.origin_y", |l| l.origin_y = -10.0),
            ("layout.spacing_x", |l| l.spacing_x = f32::NAN),
            ("layout.row_offset", |l| l.row_offset = f32::NAN),
        ];
        for (expected, corrupt) in cases {
            let mut config = PhysicsConfig::default();
            corrupt(&mut config.layout);
            match config.validate() {
                Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {} error, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PhysicsConfig::from_json(r#"{"gravity": 0.4, "layout": {"columns": 3}}"#)
            .expect("partial config should parse");
        assert_eq!(config.gravity, 0.4);
        assert_eq!(config.layout.columns, 3);
        assert_eq!(config.layout.spacing_x, 150.0);
        assert_eq!(config.bounce, 0.7);
    }

    #[test]
    fn malformed_json_is_a_config_json_error() {
        assert!(matches!(
            PhysicsConfig::from_json("{gravity"),
            Err(EngineError::InvalidConfigJson(_))
        ));
    }

    #[test]
    fn width_follows_label_length_with_floor() {
        let m = TagMetrics::regular();
        assert_eq!(m.size_for(3), (100.0, 40.0));
        assert_eq!(m.size_for(19), (190.0, 40.0));
    }

    #[test]
    fn narrow_worlds_use_compact_metrics() {
        let config = PhysicsConfig::default();
        assert_eq!(*config.metrics_for_width(500.0), TagMetrics::compact());
        assert_eq!(*config.metrics_for_width(1024.0), TagMetrics::regular());
    }
}
