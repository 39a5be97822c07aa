use std::f32::consts::TAU;

use crate::domain::config::PhysicsConfig;
use crate::domain::tags::TagDef;
use crate::systems::tag_body::TagBody;
use crate::systems::tag_physics::{clamp_into_bounds, Bounds};

use super::random::RandomSource;
use super::TagWorldCore;

/// Build one body per tag, in list order, on a grid.
///
/// Row = index / columns, column = index % columns. Jitter and the initial
/// angle come from `rng`; everything else is fixed by the config.
pub(super) fn create_bodies(
    tags: &[TagDef],
    bounds: Bounds,
    config: &PhysicsConfig,
    rng: &mut dyn RandomSource,
) -> Vec<TagBody> {
    let metrics = config.metrics_for_width(bounds.width);
    let layout = &config.layout;

    tags.iter()
        .enumerate()
        .map(|(i, tag)| {
            let (w, h) = metrics.size_for(tag.char_count());
            let col = (i as u32 % layout.columns) as f32;
            let row = (i as u32 / layout.columns) as f32;

            let x = layout.origin_x + col * layout.spacing_x + jitter(rng, layout.jitter);
            let y = layout.origin_y + row * layout.row_offset + jitter(rng, layout.jitter);
            let angle = rng.next_f32() * TAU;

            let mut body = TagBody::new(x, y, w, h).with_angle(angle);
            clamp_into_bounds(&mut body, bounds);
            body
        })
        .collect()
}

fn jitter(rng: &mut dyn RandomSource, amount: f32) -> f32 {
    if amount == 0.0 {
        return 0.0;
    }
    (rng.next_f32() * 2.0 - 1.0) * amount
}

/// (Re)create the body set for the current bounds. Drops any active drag.
pub(super) fn rebuild(world: &mut TagWorldCore) {
    world.drag = None;
    world.bodies = create_bodies(&world.tags, world.bounds, &world.config, world.rng.as_mut());
    world.ready = true;
    world.rebuild_snapshot();
    engine_log!(
        "floating tags: {} bodies in {}x{}",
        world.bodies.len(),
        world.bounds.width,
        world.bounds.height
    );
}
