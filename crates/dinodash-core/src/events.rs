//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PowerUpEffect;

/// Audio cues for the frontend sound system. Each cue is fire-and-forget;
/// overlapping playback of the same cue is permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A bullet left the muzzle.
    BulletFired,
    /// A bullet destroyed an enemy.
    EnemyHit,
    /// The player collected a power-up.
    PowerUpCollected { effect: PowerUpEffect },
    /// Health depleted; the match ended.
    GameOver,
}
