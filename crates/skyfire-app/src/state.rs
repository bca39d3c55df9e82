//! Application state shared between the frontend layer and the game loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyfire_core::commands::PlayerCommand;
use skyfire_core::state::GameStateSnapshot;

/// Commands sent from the frontend layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// Everything here is Send + Sync so a windowing or IPC layer can hold it
/// in managed state:
/// - `mpsc::Sender` is wrapped in `Mutex` (Send but not Sync)
/// - `Mutex<Option<...>>` covers state that does not exist before the loop
///   is spawned
/// - the latest snapshot is behind `Arc<Mutex<...>>`, shared with the loop
///   thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
