//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands at tick
//! boundaries, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless (no windowing dependency),
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dinodash_core::commands::PlayerCommand;
use dinodash_core::components::{Gun, Health, Hover, PulseAnim, ScaleFx};
use dinodash_core::constants::*;
use dinodash_core::enums::{ExitScorePolicy, GamePhase};
use dinodash_core::events::AudioEvent;
use dinodash_core::state::GameStateSnapshot;
use dinodash_core::types::{Rect, SimTime, SpeedBands, Viewport};

use crate::systems;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for starting a new simulation.
///
/// The band and period values exist because the source revisions disagree
/// on them; the defaults mirror the canonical revision.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial viewport geometry.
    pub viewport: Viewport,
    /// Enemy speed bands, sampled 50/50 at spawn.
    pub enemy_speed_bands: SpeedBands,
    /// Interval between enemy spawns (ms of elapsed sim time).
    pub enemy_spawn_period_ms: f64,
    /// Interval between power-up spawns (ms of elapsed sim time).
    pub powerup_spawn_period_ms: f64,
    /// Minimum interval between accepted fire requests (ms).
    pub shoot_cooldown_ms: f64,
    /// What an unkilled enemy exit does to the score.
    pub exit_score_policy: ExitScorePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            enemy_speed_bands: SpeedBands::default(),
            enemy_spawn_period_ms: DEFAULT_ENEMY_SPAWN_PERIOD_MS,
            powerup_spawn_period_ms: DEFAULT_POWERUP_SPAWN_PERIOD_MS,
            shoot_cooldown_ms: DEFAULT_SHOOT_COOLDOWN_MS,
            exit_score_policy: ExitScorePolicy::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    viewport: Viewport,
    config: GameConfig,
    rng: ChaCha8Rng,
    score: i64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    spawn_clock: SpawnClock,
    player: hecs::Entity,
}

impl GameEngine {
    /// Create a new simulation engine with the given config.
    /// The match starts in `Running` with an empty field and a fresh player.
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        let viewport = config.viewport;
        let player = world_setup::spawn_player(&mut world, viewport);
        let spawn_clock = SpawnClock::new(
            config.enemy_spawn_period_ms,
            config.powerup_spawn_period_ms,
        );
        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            viewport,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            spawn_clock,
            player,
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Systems only run while the phase is `Running`; a paused or finished
    /// match still processes commands and re-snapshots without mutation.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            self.viewport,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Get the current viewport geometry.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player entity (for direct inspection in tests).
    #[cfg(test)]
    pub fn player(&self) -> hecs::Entity {
        self.player
    }

    /// Spawn an enemy at a fixed position and speed (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, x: f64, speed: f64) -> hecs::Entity {
        world_setup::spawn_enemy_at(&mut self.world, x, speed, self.viewport)
    }

    /// Spawn a power-up at a fixed position (for testing).
    #[cfg(test)]
    pub fn spawn_test_powerup(&mut self, x: f64) -> hecs::Entity {
        world_setup::spawn_power_up_at(&mut self.world, x, self.viewport)
    }

    /// Overwrite the player's health (for testing terminal transitions).
    #[cfg(test)]
    pub fn set_health(&mut self, value: i32) {
        if let Ok(mut health) = self.world.get::<&mut Health>(self.player) {
            health.current = value;
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Jump => {
                if self.phase == GamePhase::Running {
                    systems::physics::try_jump(&mut self.world, self.player);
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Running {
                    self.try_fire();
                }
            }
            PlayerCommand::SetHover { hovered } => {
                // Cosmetic only, allowed in any phase.
                if let Ok(mut hover) = self.world.get::<&mut Hover>(self.player) {
                    hover.hovered = hovered;
                }
            }
            PlayerCommand::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                world_setup::repin_to_ground(&mut self.world, self.viewport);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::Restart => {
                self.reset();
            }
        }
    }

    /// Fire a bullet, subject to the shoot cooldown.
    ///
    /// On acceptance: stamp the gun, spawn the bullet at the player's
    /// leading edge, start the cosmetic scale pulse, emit the fire cue.
    /// Inside the cooldown the request is silently dropped.
    fn try_fire(&mut self) {
        let now = self.time.elapsed_ms;

        let last_shot = match self.world.get::<&Gun>(self.player) {
            Ok(gun) => gun.last_shot_ms,
            Err(_) => return,
        };
        if let Some(last) = last_shot {
            if now - last < self.config.shoot_cooldown_ms {
                return;
            }
        }
        if let Ok(mut gun) = self.world.get::<&mut Gun>(self.player) {
            gun.last_shot_ms = Some(now);
        }

        let body = match self.world.get::<&Rect>(self.player) {
            Ok(body) => *body,
            Err(_) => return,
        };
        world_setup::spawn_bullet(&mut self.world, &body);

        if let Ok(mut fx) = self.world.get::<&mut ScaleFx>(self.player) {
            fx.pulse = Some(PulseAnim {
                start_ms: now,
                duration_ms: PULSE_DURATION_MS,
                from: PULSE_SCALE,
                to: 1.0,
            });
        }

        self.audio_events.push(AudioEvent::BulletFired);
    }

    /// Reset the match to its initial state. Idempotent: resetting an
    /// already-initial engine yields the same state again. The current
    /// viewport is kept; the RNG is reseeded from the config.
    fn reset(&mut self) {
        self.world.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = SimTime::default();
        self.phase = GamePhase::Running;
        self.score = 0;
        self.command_queue.clear();
        self.despawn_buffer.clear();
        self.audio_events.clear();
        self.spawn_clock = SpawnClock::new(
            self.config.enemy_spawn_period_ms,
            self.config.powerup_spawn_period_ms,
        );
        self.player = world_setup::spawn_player(&mut self.world, self.viewport);
        log::debug!("match restarted");
    }

    /// Run all systems in order. The order is part of the contract:
    /// exits must be culled before collision tests against the same
    /// entities, and bullet kills must precede player contact.
    fn run_systems(&mut self) {
        // 1. Timed spawning (wall-clock schedule, not frame count)
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.config.enemy_speed_bands,
            self.viewport,
            self.time.elapsed_ms,
            &mut self.spawn_clock,
        );
        // 2. Player gravity integration + ground clamp
        systems::physics::run(&mut self.world, self.viewport);
        // 3. Expire finished cosmetic pulses
        systems::animation::run(&mut self.world, self.time.elapsed_ms);
        // 4. Bullets advance, right-edge cull
        systems::bullets::run(&mut self.world, self.viewport, &mut self.despawn_buffer);
        // 5. Enemies advance, exit cull, bullet kills, player contact
        systems::enemies::run(
            &mut self.world,
            self.player,
            self.config.exit_score_policy,
            &mut self.score,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 6. Terminal transition (one-way). Checked before power-ups so a
        //    pickup in the same step cannot undo a depleted-health finish.
        self.check_game_over();
        if self.phase != GamePhase::Running {
            return;
        }
        // 7. Power-ups advance, exit cull, pickup
        systems::powerups::run(
            &mut self.world,
            self.player,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
    }

    /// Transition to `GameOver` when health is depleted. Fires exactly
    /// once; the phase check makes the transition one-way.
    fn check_game_over(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        let depleted = match self.world.get::<&Health>(self.player) {
            Ok(health) => health.current <= 0,
            Err(_) => false,
        };
        if depleted {
            self.phase = GamePhase::GameOver;
            self.audio_events.push(AudioEvent::GameOver);
            log::info!(
                "game over at tick {} with score {}",
                self.time.tick,
                self.score
            );
        }
    }
}
