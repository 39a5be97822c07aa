use crate::systems::tag_physics::step_body;

use super::TagWorldCore;

/// One animation frame: advance every free body, then publish.
///
/// Returns false (and does nothing) until the world has valid bounds.
pub(super) fn step(world: &mut TagWorldCore) -> bool {
    if !world.ready {
        return false;
    }

    let perf_on = world.perf_enabled;
    let started_ms = if perf_on {
        world.perf_stats.reset();
        Some(now_ms())
    } else {
        None
    };

    let bounds = world.bounds;
    let mut stepped = 0u32;
    let mut held = 0u32;
    let mut walls = 0u32;
    let mut floors = 0u32;

    for body in world.bodies.iter_mut() {
        if body.held {
            held += 1;
            continue;
        }
        let (next, contacts) = step_body(body, bounds, &world.config);
        *body = next;
        stepped += 1;
        walls += contacts.count();
        floors += contacts.floor as u32;
    }

    world.frame += 1;
    world.refresh_snapshot();

    if let Some(started_ms) = started_ms {
        let stats = &mut world.perf_stats;
        stats.step_ms = (now_ms() - started_ms).max(0.0);
        stats.bodies_stepped = stepped;
        stats.bodies_held = held;
        stats.wall_contacts = walls;
        stats.floor_contacts = floors;
        stats.frame = world.frame;
    }
    true
}

/// Monotonic milliseconds, the same clock `requestAnimationFrame` stamps
/// frames with. Falls back to `Date.now()` outside a window (workers).
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}
