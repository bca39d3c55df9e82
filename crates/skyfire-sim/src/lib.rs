//! Headless simulation engine for SKYFIRE.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs all
//! systems in a fixed order each tick, and produces `GameStateSnapshot`s.
//! Completely headless (no window or renderer dependency), enabling
//! deterministic testing.

pub mod engine;
pub mod input;
pub mod sprites;
pub mod systems;
pub mod world_setup;
