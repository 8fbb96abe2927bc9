//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Axis-aligned rectangle in screen space. `pos` is the top-left corner;
/// y grows downward, as on a canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    /// Left edge x.
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    /// Right edge x.
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    /// Top edge y.
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    /// Bottom edge y.
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// Full two-axis AABB overlap test. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Current viewport geometry. Supplies the ground line and the rest
/// heights derived from it; nothing else about the display is known
/// to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the walkable floor.
    pub fn ground_line(&self) -> f64 {
        self.height - GROUND_HEIGHT
    }

    /// Y at which the player's top edge rests when grounded.
    pub fn player_rest_y(&self) -> f64 {
        self.ground_line() - PLAYER_REST_LIFT
    }

    /// Y at which an enemy's top edge rests.
    pub fn enemy_rest_y(&self) -> f64 {
        self.ground_line() - ENEMY_REST_LIFT
    }

    /// Y at which a power-up hovers.
    pub fn powerup_rest_y(&self) -> f64 {
        self.ground_line() - POWERUP_REST_LIFT
    }
}

/// Two uniform speed bands for enemy spawns, sampled 50/50.
/// Bands differ across source revisions, so they are configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBands {
    /// Slow band (min, max) in px/step.
    pub slow: (f64, f64),
    /// Fast band (min, max) in px/step.
    pub fast: (f64, f64),
}

impl Default for SpeedBands {
    fn default() -> Self {
        Self {
            slow: (3.0, 5.0),
            fast: (5.0, 8.0),
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += STEP_MS;
    }
}
