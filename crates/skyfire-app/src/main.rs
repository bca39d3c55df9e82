//! Headless Skyfire runner.
//!
//! Spawns the game loop, starts a session, and prints the score on exit.
//! Pass a directory of silhouette assets as the first argument to load real
//! shapes; without one the built-in placeholder shapes are used.

use std::time::Duration;

use log::LevelFilter;

use skyfire_app::game_loop::spawn_game_loop;
use skyfire_app::state::{AppState, GameLoopCommand};
use skyfire_core::commands::PlayerCommand;
use skyfire_core::enums::ShipClass;
use skyfire_core::silhouette::{DirStore, MemoryStore, SilhouetteStore};
use skyfire_sim::engine::SimConfig;

fn main() {
    if let Err(e) = simple_logging::log_to_file("skyfire.log", LevelFilter::Info) {
        eprintln!("logging unavailable: {e}");
    }

    let store: Box<dyn SilhouetteStore> = match std::env::args().nth(1) {
        Some(assets) => Box::new(DirStore::new(assets)),
        None => Box::new(MemoryStore::with_default_shapes()),
    };

    let state = AppState::new();
    let tx = match spawn_game_loop(
        SimConfig::default(),
        store,
        state.latest_snapshot.clone(),
    ) {
        Ok(tx) => tx,
        Err(e) => {
            eprintln!("failed to spawn game loop: {e}");
            return;
        }
    };
    *state.running.lock().unwrap_or_else(|p| p.into_inner()) = true;

    let _ = tx.send(GameLoopCommand::Player(PlayerCommand::SelectShip {
        class: ShipClass::Interceptor,
    }));

    // Let the session run for a few seconds, then report and exit.
    std::thread::sleep(Duration::from_secs(10));

    if let Ok(lock) = state.latest_snapshot.lock() {
        if let Some(snapshot) = lock.as_ref() {
            println!(
                "tick {} phase {:?} score {} enemies {} projectiles {}",
                snapshot.time.tick,
                snapshot.phase,
                snapshot.score.score,
                snapshot.enemies.len(),
                snapshot.projectiles.len()
            );
        }
    }
    let _ = tx.send(GameLoopCommand::Shutdown);
}
