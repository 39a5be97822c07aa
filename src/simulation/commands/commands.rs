use crate::core::error::Result;
use crate::domain::tags::{validate_tags, TagDef};
use crate::systems::tag_physics::{clamp_into_bounds, Bounds};

use super::init;
use super::TagWorldCore;

/// Container size changed. First valid size creates the bodies; after that
/// free bodies are only pushed back inside.
pub(super) fn resize(world: &mut TagWorldCore, width: f32, height: f32) -> bool {
    let bounds = Bounds::new(width, height);
    if !bounds.is_valid() {
        engine_warn!("floating tags: ignoring degenerate size {}x{}", width, height);
        return false;
    }
    world.bounds = bounds;

    if !world.ready {
        init::rebuild(world);
        return true;
    }

    for body in world.bodies.iter_mut().filter(|b| !b.held) {
        clamp_into_bounds(body, bounds);
    }
    world.refresh_snapshot();
    true
}

/// Recreate every body from the tag list at the current size.
pub(super) fn reset(world: &mut TagWorldCore) -> bool {
    if !world.bounds.is_valid() {
        return false;
    }
    init::rebuild(world);
    true
}

pub(super) fn set_tags(world: &mut TagWorldCore, tags: Vec<TagDef>) -> Result<()> {
    validate_tags(&tags)?;
    world.tags = tags;
    world.drag = None;
    if world.ready {
        init::rebuild(world);
    }
    Ok(())
}
