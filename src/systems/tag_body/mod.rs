//! TagBody - a draggable pill that moves as a unit
//!
//! Position is the pill's center in container pixels (origin top-left, y down).
//! Extents are fixed at creation; rotation is cosmetic for collision purposes
//! (walls test the axis-aligned half-extents) but is honored by hit testing.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::TagBody;
