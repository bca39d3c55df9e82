//! Skyfire headless application shell.
//!
//! Hosts the simulation engine on a fixed-rate game loop thread and exposes
//! the command channel plus latest-snapshot slot a frontend polls.

pub mod game_loop;
pub mod state;

pub use skyfire_core as core;
