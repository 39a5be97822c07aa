//! Systems: the body model, the per-frame physics and pointer dragging.

pub mod drag;
pub mod tag_body;
pub mod tag_physics;
