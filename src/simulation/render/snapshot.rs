use serde::Serialize;

use crate::domain::tags::TagDef;
use crate::systems::tag_body::TagBody;

/// What the renderer needs to draw one pill. Read-only view of a body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub index: usize,
    pub label: String,
    pub color: String,
    pub text_color: String,
    /// Center, container pixels
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Radians
    pub rotation: f32,
    pub held: bool,
}

impl BodySnapshot {
    pub(crate) fn new(index: usize, tag: &TagDef, body: &TagBody) -> Self {
        let mut snap = Self {
            index,
            label: tag.text.clone(),
            color: tag.color.clone(),
            text_color: tag.text_color.clone(),
            x: 0.0,
            y: 0.0,
            width: body.width(),
            height: body.height(),
            rotation: 0.0,
            held: false,
        };
        snap.update(body);
        snap
    }

    /// Copy the per-frame state; labels and sizes never change.
    #[inline]
    pub(crate) fn update(&mut self, body: &TagBody) {
        self.x = body.pos.x;
        self.y = body.pos.y;
        self.rotation = body.angle;
        self.held = body.held;
    }

    /// Top-left corner of the unrotated pill, for absolutely positioned DOM.
    pub fn left(&self) -> f32 {
        self.x - self.width * 0.5
    }

    pub fn top(&self) -> f32 {
        self.y - self.height * 0.5
    }
}
