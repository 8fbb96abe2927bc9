//! Headless driver for the DINODASH simulation: a fixed-rate game loop
//! thread plus the shared state used to talk to it.

pub mod game_loop;
pub mod state;
