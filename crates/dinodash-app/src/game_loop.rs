//! Game loop thread — runs the simulation engine at the fixed tick rate
//! and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are stored in
//! shared state for synchronous polling by the presentation layer; audio
//! cues are surfaced through the log (the headless stand-in for the audio
//! collaborator).

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use dinodash_core::commands::PlayerCommand;
use dinodash_core::constants::TICK_RATE;
use dinodash_sim::engine::{GameConfig, GameEngine};

use crate::state::{GameLoopCommand, GameLoopHandle, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// The loop waits on `ready_rx` before its first scheduled step, the
/// asset-readiness gate. The gate still services the command channel:
/// a shutdown sent while gated exits immediately, and player commands
/// are held for the first tick.
pub fn spawn_game_loop(config: GameConfig, ready_rx: mpsc::Receiver<()>) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let snapshot_slot = Arc::clone(&latest_snapshot);

    std::thread::Builder::new()
        .name("dinodash-game-loop".into())
        .spawn(move || match wait_for_readiness(&ready_rx, &cmd_rx) {
            Some(pending) => run_game_loop(config, pending, cmd_rx, &snapshot_slot),
            None => log::debug!("shutdown requested before readiness"),
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
    }
}

/// Block until the readiness signal arrives, polling the command channel
/// in between. Returns the player commands that accumulated while gated
/// (queued for the first tick), or `None` when a shutdown was requested.
/// A dropped sender is treated as "ready" so a failed asset load degrades
/// gracefully instead of stalling the game.
fn wait_for_readiness(
    ready_rx: &mpsc::Receiver<()>,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> Option<Vec<PlayerCommand>> {
    let mut pending = Vec::new();
    loop {
        match ready_rx.recv_timeout(TICK_DURATION) {
            Ok(()) => return Some(pending),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                log::warn!("readiness signal lost; starting without it");
                return Some(pending);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => loop {
                match cmd_rx.try_recv() {
                    Ok(GameLoopCommand::PlayerCommand(cmd)) => pending.push(cmd),
                    Ok(GameLoopCommand::Shutdown) => return None,
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => return None,
                }
            },
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    pending: Vec<PlayerCommand>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<dinodash_core::state::GameStateSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    engine.queue_commands(pending);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause and game-over
        //    semantics internally)
        let snapshot = engine.tick();

        // 3. Surface audio cues
        for event in &snapshot.audio_events {
            log::debug!("audio cue: {event:?}");
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            log::warn!("game loop lagging; resetting tick schedule");
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinodash_core::commands::PlayerCommand;
    use dinodash_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Jump))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Jump)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_waits_for_readiness_then_publishes() {
        let (ready_tx, ready_rx) = mpsc::channel::<()>();
        let handle = spawn_game_loop(GameConfig::default(), ready_rx);

        // Gated: nothing published before the readiness signal.
        std::thread::sleep(Duration::from_millis(50));
        assert!(handle.latest_snapshot.lock().unwrap().is_none());

        ready_tx.send(()).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        let snapshot = handle.latest_snapshot.lock().unwrap().clone();
        let snapshot = snapshot.expect("loop should publish snapshots once ready");
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert!(snapshot.time.tick > 0);

        handle.command_tx.send(GameLoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_shutdown_honored_while_gated() {
        let (ready_tx, ready_rx) = mpsc::channel::<()>();
        let handle = spawn_game_loop(GameConfig::default(), ready_rx);

        handle.command_tx.send(GameLoopCommand::Shutdown).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        // The loop exited before readiness; signaling it changes nothing.
        let _ = ready_tx.send(());
        std::thread::sleep(Duration::from_millis(100));
        assert!(handle.latest_snapshot.lock().unwrap().is_none());
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = GameEngine::new(GameConfig::default());

        // Run enough ticks to populate entities
        for _ in 0..200 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
