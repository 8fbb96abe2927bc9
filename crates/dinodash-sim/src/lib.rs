//! Simulation engine for DINODASH.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use dinodash_core as core;
pub use engine::GameEngine;

#[cfg(test)]
mod tests;
