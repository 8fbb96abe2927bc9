//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Out-of-contract requests (jump mid-air, fire inside the cooldown,
//! resume while running) are silently ignored, never signaled.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Jump. Accepted only while grounded.
    Jump,
    /// Fire a bullet. Accepted only when the shoot cooldown has elapsed.
    Fire,
    /// Pointer entered/left the player sprite (cosmetic only).
    SetHover { hovered: bool },
    /// Viewport geometry changed; grounded entities are re-pinned.
    Resize { width: f64, height: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Reset the world, score, health, and phase to their initial values.
    Restart,
}
