//! Simulation systems, run once per tick in a fixed order.
//!
//! See `GameEngine::run_systems` for the ordering contract.

pub mod animation;
pub mod bullets;
pub mod enemies;
pub mod physics;
pub mod powerups;
pub mod snapshot;
pub mod spawner;
