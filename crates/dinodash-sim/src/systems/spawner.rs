//! Timed spawning system — emits enemies and power-ups on independent
//! wall-clock schedules.
//!
//! Schedules are keyed off elapsed simulation time, not frame counts, so
//! cadence is stable under a different tick rate, and pause suspends both
//! schedules coherently. The engine only runs this system while the match
//! is `Running`, so nothing spawns after game-over.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use dinodash_core::types::{SpeedBands, Viewport};

use crate::world_setup;

/// Next-due times for the two spawn schedules, owned by the engine.
#[derive(Debug, Clone)]
pub struct SpawnClock {
    enemy_period_ms: f64,
    powerup_period_ms: f64,
    next_enemy_at_ms: f64,
    next_powerup_at_ms: f64,
}

impl SpawnClock {
    /// A fresh clock: the first enemy/power-up each arrive one full
    /// period after the match starts.
    pub fn new(enemy_period_ms: f64, powerup_period_ms: f64) -> Self {
        Self {
            enemy_period_ms,
            powerup_period_ms,
            next_enemy_at_ms: enemy_period_ms,
            next_powerup_at_ms: powerup_period_ms,
        }
    }
}

/// Spawn every entity whose schedule has come due. A step that spans
/// multiple periods spawns once per elapsed period.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bands: &SpeedBands,
    viewport: Viewport,
    now_ms: f64,
    clock: &mut SpawnClock,
) {
    while now_ms >= clock.next_enemy_at_ms {
        world_setup::spawn_enemy(world, rng, bands, viewport);
        clock.next_enemy_at_ms += clock.enemy_period_ms;
        log::debug!("enemy spawned at t={now_ms:.0}ms");
    }
    while now_ms >= clock.next_powerup_at_ms {
        world_setup::spawn_power_up(world, rng, viewport);
        clock.next_powerup_at_ms += clock.powerup_period_ms;
        log::debug!("power-up spawned at t={now_ms:.0}ms");
    }
}
