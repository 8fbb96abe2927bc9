//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `GameOver` is terminal: the only way out is an explicit `Restart`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation stepping normally.
    #[default]
    Running,
    /// Simulation suspended; elapsed time does not advance.
    Paused,
    /// Health depleted. No gameplay mutation until restart.
    GameOver,
}

/// Effect granted by a power-up on pickup.
///
/// Only `Health` exists today; the spawn contract does not change when
/// new kinds are added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpEffect {
    /// Restores one point of health.
    #[default]
    Health,
}

/// Scoring policy applied when an enemy exits the left edge unkilled.
///
/// One source revision deducted score on pure exits while the others did
/// not; the deduction conflicts with score-for-kill, so `Ignore` is the
/// default and the penalty is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitScorePolicy {
    /// Unkilled exits leave the score untouched.
    #[default]
    Ignore,
    /// Unkilled exits deduct a fixed amount from the score.
    Penalize { amount: i64 },
}
