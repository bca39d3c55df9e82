//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! in the engine's small side structures (input, spawn timer, score).

pub mod collision;
pub mod enemy_ai;
pub mod fire_control;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
