//! Game loop thread — runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for synchronous polling by a frontend.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::info;

use skyfire_core::constants::TICK_RATE;
use skyfire_core::silhouette::SilhouetteStore;
use skyfire_core::state::GameStateSnapshot;
use skyfire_sim::engine::{GameEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the frontend layer to use. The loop ends
/// on a `Shutdown` command or when every sender is dropped.
pub fn spawn_game_loop(
    config: SimConfig,
    store: Box<dyn SilhouetteStore>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skyfire-game-loop".into())
        .spawn(move || {
            run_game_loop(config, store, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    store: Box<dyn SilhouetteStore>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = GameEngine::new(config, store);
    let mut next_tick_time = Instant::now();
    info!("game loop running at {TICK_RATE}Hz");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine is phase-aware internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfire_core::commands::PlayerCommand;
    use skyfire_core::enums::{GamePhase, ShipClass};
    use skyfire_core::silhouette::MemoryStore;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::SelectShip {
            class: ShipClass::Interceptor,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Fire)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::SelectShip {
                class: ShipClass::Interceptor
            })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Fire)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = GameEngine::new(
            SimConfig::default(),
            Box::new(MemoryStore::with_default_shapes()),
        );
        engine.queue_command(PlayerCommand::SelectShip {
            class: ShipClass::Interceptor,
        });

        // Run enough ticks to populate entities
        for _ in 0..400 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_thread_reaches_active_phase() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            SimConfig::default(),
            Box::new(MemoryStore::with_default_shapes()),
            Arc::clone(&latest),
        )
        .unwrap();

        tx.send(GameLoopCommand::Player(PlayerCommand::SelectShip {
            class: ShipClass::Striker,
        }))
        .unwrap();

        // Generous budget for a handful of 60Hz ticks.
        std::thread::sleep(Duration::from_millis(300));
        let snapshot = latest.lock().unwrap().clone();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let snapshot = snapshot.expect("loop published at least one snapshot");
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick > 0);
        assert_eq!(snapshot.turrets.len(), 2);
    }
}
