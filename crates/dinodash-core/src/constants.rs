//! Simulation constants and tuning parameters.
//!
//! Physics quantities are in screen pixels per step (the simulation is
//! frame-locked at `TICK_RATE`); wall-clock quantities are in milliseconds
//! of elapsed simulation time.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const STEP_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Viewport / ground ---

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

/// Height of the ground strip at the bottom of the viewport.
/// The ground line is `viewport_height - GROUND_HEIGHT`.
pub const GROUND_HEIGHT: f64 = 120.0;

/// How far above the ground line the player's top edge rests.
pub const PLAYER_REST_LIFT: f64 = 20.0;

/// How far above the ground line an enemy's top edge rests.
pub const ENEMY_REST_LIFT: f64 = 10.0;

/// How far above the ground line a power-up hovers.
pub const POWERUP_REST_LIFT: f64 = 60.0;

// --- Player ---

/// Fixed horizontal position of the player's left edge.
pub const PLAYER_X: f64 = 30.0;

/// Player bounding-box width.
pub const PLAYER_WIDTH: f64 = 120.0;

/// Player bounding-box height.
pub const PLAYER_HEIGHT: f64 = 120.0;

/// Downward acceleration applied to the player each step (px/step²).
pub const GRAVITY: f64 = 0.5;

/// Vertical velocity set on an accepted jump (px/step, negative = up).
pub const JUMP_IMPULSE: f64 = -12.0;

/// Starting (and post-restart) player health.
pub const STARTING_HEALTH: i32 = 3;

/// Minimum wall-clock interval between two accepted fire requests.
pub const DEFAULT_SHOOT_COOLDOWN_MS: f64 = 200.0;

// --- Bullets ---

/// Bullet bounding-box width.
pub const BULLET_WIDTH: f64 = 10.0;

/// Bullet bounding-box height.
pub const BULLET_HEIGHT: f64 = 5.0;

/// Rightward bullet speed (px/step).
pub const BULLET_SPEED: f64 = 8.0;

/// Vertical offset of the muzzle below the player's top edge.
pub const BULLET_MUZZLE_DROP: f64 = 20.0;

// --- Enemies ---

/// Enemy bounding-box width.
pub const ENEMY_WIDTH: f64 = 150.0;

/// Enemy bounding-box height.
pub const ENEMY_HEIGHT: f64 = 120.0;

/// Default interval between enemy spawns (ms).
pub const DEFAULT_ENEMY_SPAWN_PERIOD_MS: f64 = 2000.0;

/// Score awarded for each enemy destroyed by a bullet.
pub const KILL_REWARD: i64 = 5;

/// Score deducted per unkilled exit under the penalizing exit policy.
pub const EXIT_PENALTY: i64 = 1;

// --- Power-ups ---

/// Power-up bounding-box width.
pub const POWERUP_WIDTH: f64 = 20.0;

/// Power-up bounding-box height.
pub const POWERUP_HEIGHT: f64 = 20.0;

/// Leftward power-up speed (px/step).
pub const POWERUP_SPEED: f64 = 4.0;

/// Default interval between power-up spawns (ms).
/// Source revisions vary between 10 and 14 seconds; configurable.
pub const DEFAULT_POWERUP_SPAWN_PERIOD_MS: f64 = 10_000.0;

// --- Spawning ---

/// Horizontal jitter added past the right edge at spawn: uniform [0, this).
pub const SPAWN_EDGE_JITTER: f64 = 200.0;

// --- Cosmetic ---

/// Scale the player snaps to when firing.
pub const PULSE_SCALE: f64 = 1.2;

/// Duration of the fire scale pulse (ms).
pub const PULSE_DURATION_MS: f64 = 300.0;
