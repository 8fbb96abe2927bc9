//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.
//! Every entity with a screen presence also carries a `types::Rect` body.

use serde::{Deserialize, Serialize};

use crate::enums::PowerUpEffect;

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// The player's vertical motion state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VerticalMotion {
    /// Vertical velocity in px/step (negative = up).
    pub velocity: f64,
    /// Set on an accepted jump, cleared when the ground clamp engages.
    pub jumping: bool,
}

/// Player health. Floored at 0, at which point the match ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
}

/// Fire cooldown gate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Gun {
    /// Elapsed-ms stamp of the last accepted fire. `None` before the
    /// first shot, so the first fire request is always accepted.
    pub last_shot_ms: Option<f64>,
}

/// A timed cosmetic animation: a value interpolated from `from` to `to`
/// over `duration_ms`, sampled as a pure function of elapsed time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PulseAnim {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub from: f64,
    pub to: f64,
}

impl PulseAnim {
    /// Interpolated value at `now_ms`, clamped to the animation span.
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let progress = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * progress
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}

/// Cosmetic scale effect on the player. Never read by collision or
/// scoring; the presentation layer samples it through the snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScaleFx {
    /// Active pulse, if any. Expired pulses are cleared each step.
    pub pulse: Option<PulseAnim>,
}

impl ScaleFx {
    /// Current visual scale (1.0 when no pulse is active).
    pub fn scale_at(&self, now_ms: f64) -> f64 {
        self.pulse.map_or(1.0, |p| p.value_at(now_ms))
    }
}

/// Cosmetic pointer-hover flag on the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Hover {
    pub hovered: bool,
}

/// Marks a bullet. Moves rightward at a fixed speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;

/// An approaching enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Leftward speed in px/step, fixed at spawn.
    pub speed: f64,
}

/// A drifting power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub effect: PowerUpEffect,
}
