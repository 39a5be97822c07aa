use crate::domain::config::PhysicsConfig;

use super::perf_stats::PerfStats;
use super::TagWorldCore;

pub(super) fn enable_perf_metrics(world: &mut TagWorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &TagWorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn config(world: &TagWorldCore) -> &PhysicsConfig {
    &world.config
}
