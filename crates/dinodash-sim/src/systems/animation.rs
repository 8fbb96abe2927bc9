//! Cosmetic animation upkeep.
//!
//! Pulses are plain timed records sampled by the snapshot as a pure
//! function of elapsed time; this system only clears the expired ones.

use hecs::World;

use dinodash_core::components::ScaleFx;

/// Drop scale pulses whose duration has elapsed.
pub fn run(world: &mut World, now_ms: f64) {
    for (_entity, fx) in world.query_mut::<&mut ScaleFx>() {
        if let Some(pulse) = fx.pulse {
            if pulse.finished(now_ms) {
                fx.pulse = None;
            }
        }
    }
}
