//! Game state snapshot — the complete visible state sent to the
//! presentation layer each tick.
//!
//! The snapshot is a pure read of the world: consumers never mutate
//! gameplay state through it.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, PowerUpEffect};
use crate::events::AudioEvent;
use crate::types::{Rect, SimTime, Viewport};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Running score. May go negative under a penalizing exit policy.
    pub score: i64,
    pub viewport: Viewport,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub powerups: Vec<PowerUpView>,
    /// Audio cues produced this tick, drained from the engine.
    pub audio_events: Vec<AudioEvent>,
}

/// The player as seen by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub body: Rect,
    /// Vertical velocity (px/step).
    pub velocity: f64,
    pub jumping: bool,
    pub health: i32,
    /// Cosmetic scale factor sampled from the active pulse (1.0 idle).
    pub scale: f64,
    /// Cosmetic pointer-hover flag.
    pub hovered: bool,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            body: Rect::default(),
            velocity: 0.0,
            jumping: false,
            health: crate::constants::STARTING_HEALTH,
            scale: 1.0,
            hovered: false,
        }
    }
}

/// A bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub body: Rect,
}

/// An approaching enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub body: Rect,
    pub speed: f64,
}

/// A drifting power-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub body: Rect,
    pub effect: PowerUpEffect,
}
