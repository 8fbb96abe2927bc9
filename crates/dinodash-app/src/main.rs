//! Headless runner: drives the simulation for a fixed number of ticks
//! with a scripted jump/fire pattern and prints the final snapshot as
//! JSON. Useful for smoke-testing and for diffing runs by seed.

use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;

use dinodash_app::game_loop::spawn_game_loop;
use dinodash_app::state::GameLoopCommand;
use dinodash_core::commands::PlayerCommand;
use dinodash_core::constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, EXIT_PENALTY, TICK_RATE,
};
use dinodash_core::enums::ExitScorePolicy;
use dinodash_core::state::GameStateSnapshot;
use dinodash_core::types::Viewport;
use dinodash_sim::engine::{GameConfig, GameEngine};

#[derive(Debug, Parser)]
#[command(name = "dinodash", about = "Headless DINODASH simulation runner")]
struct Args {
    /// RNG seed. Same seed = same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    height: f64,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Deduct score when an enemy exits unkilled.
    #[arg(long)]
    penalize_exits: bool,

    /// Drive the run through the 60Hz game-loop thread instead of
    /// ticking as fast as possible.
    #[arg(long)]
    realtime: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig {
        seed: args.seed,
        viewport: Viewport::new(args.width, args.height),
        exit_score_policy: if args.penalize_exits {
            ExitScorePolicy::Penalize {
                amount: EXIT_PENALTY,
            }
        } else {
            ExitScorePolicy::Ignore
        },
        ..Default::default()
    };

    log::info!(
        "starting headless run: {} ticks, seed {}",
        args.ticks,
        args.seed
    );
    let snapshot = if args.realtime {
        run_realtime(config, args.ticks)
    } else {
        run_fast(config, args.ticks)
    };

    if let Some(snapshot) = snapshot {
        log::info!(
            "finished: phase {:?}, score {}, health {}",
            snapshot.phase,
            snapshot.score,
            snapshot.player.health
        );
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize snapshot: {err}"),
        }
    }
}

/// Scripted input: hop regularly, fire often.
fn scripted_command(tick: u64) -> Option<PlayerCommand> {
    if tick % 90 == 0 {
        Some(PlayerCommand::Jump)
    } else if tick % 20 == 0 {
        Some(PlayerCommand::Fire)
    } else {
        None
    }
}

/// Tick the engine directly, as fast as possible.
fn run_fast(config: GameConfig, ticks: u64) -> Option<GameStateSnapshot> {
    let mut engine = GameEngine::new(config);
    let mut last = None;
    for tick in 0..ticks {
        if let Some(cmd) = scripted_command(tick) {
            engine.queue_command(cmd);
        }
        last = Some(engine.tick());
    }
    last
}

/// Drive the run through the game-loop thread at wall-clock speed,
/// releasing the readiness gate immediately (nothing to load headless).
fn run_realtime(config: GameConfig, ticks: u64) -> Option<GameStateSnapshot> {
    let (ready_tx, ready_rx) = mpsc::channel();
    let handle = spawn_game_loop(config, ready_rx);
    let _ = ready_tx.send(());

    for tick in 0..ticks {
        if let Some(cmd) = scripted_command(tick) {
            if handle
                .command_tx
                .send(GameLoopCommand::PlayerCommand(cmd))
                .is_err()
            {
                break;
            }
        }
        std::thread::sleep(Duration::from_nanos(1_000_000_000 / TICK_RATE as u64));
    }

    let snapshot = handle
        .latest_snapshot
        .lock()
        .ok()
        .and_then(|slot| slot.clone());
    let _ = handle.command_tx.send(GameLoopCommand::Shutdown);
    snapshot
}
