//! Shared state between the game loop thread and its callers.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use dinodash_core::commands::PlayerCommand;
use dinodash_core::state::GameStateSnapshot;

/// Commands sent from the outside (input layer, UI) to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, updated by the game loop thread after each tick
/// and read synchronously by the presentation layer.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handle to a running game loop: the command sender plus the snapshot slot.
pub struct GameLoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
}
