use crate::systems::drag::DragState;
use crate::systems::tag_body::Vec2;

use super::TagWorldCore;

/// Top-most body under the point; later bodies are drawn on top.
pub(super) fn body_at(world: &TagWorldCore, x: f32, y: f32) -> Option<usize> {
    let p = Vec2::new(x, y);
    world.bodies.iter().rposition(|b| b.contains_point(p))
}

/// FREE -> HELD. A second grab while one body is held is ignored.
pub(super) fn pointer_down(world: &mut TagWorldCore, index: usize, x: f32, y: f32) -> bool {
    if !world.ready {
        return false;
    }
    if let Some(drag) = world.drag {
        engine_warn!("floating tags: ignoring grab of {} while {} is held", index, drag.index);
        return false;
    }
    let Some(body) = world.bodies.get_mut(index) else {
        return false;
    };
    world.drag = Some(DragState::grab(index, body, Vec2::new(x, y)));
    world.refresh_snapshot();
    true
}

pub(super) fn pointer_down_at(world: &mut TagWorldCore, x: f32, y: f32) -> Option<usize> {
    let index = body_at(world, x, y)?;
    if pointer_down(world, index, x, y) {
        Some(index)
    } else {
        None
    }
}

/// While HELD the body follows the pointer exactly.
pub(super) fn pointer_move(world: &mut TagWorldCore, x: f32, y: f32) -> bool {
    let Some(drag) = world.drag.as_mut() else {
        return false;
    };
    let Some(body) = world.bodies.get_mut(drag.index) else {
        return false;
    };
    drag.follow(body, Vec2::new(x, y));
    world.refresh_snapshot();
    true
}

/// HELD -> FREE with a throw velocity. The up position itself is not a
/// sample: the release velocity comes from the last two moves.
pub(super) fn pointer_up(world: &mut TagWorldCore, _x: f32, _y: f32) -> bool {
    let Some(drag) = world.drag.take() else {
        return false;
    };
    match world.bodies.get_mut(drag.index) {
        Some(body) => drag.release(body, &world.config),
        None => return false,
    }
    world.refresh_snapshot();
    true
}

/// Drop the held body in place with no velocity.
pub(super) fn cancel_drag(world: &mut TagWorldCore) -> bool {
    let Some(drag) = world.drag.take() else {
        return false;
    };
    if let Some(body) = world.bodies.get_mut(drag.index) {
        drag.cancel(body);
    }
    world.refresh_snapshot();
    true
}
