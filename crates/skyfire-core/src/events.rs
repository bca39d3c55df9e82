//! Events emitted by the simulation for the menu/HUD collaborators.
//!
//! Fire-and-forget: nothing the listeners do feeds back into sim state.

use serde::{Deserialize, Serialize};

use crate::enums::ShipClass;

/// Notifications carried on each snapshot for HUD and menu layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A session started with the chosen ship.
    ShipChosen { class: ShipClass },
    /// Player health changed (damage or reset).
    HealthChanged { value: i32 },
    /// Score changed by `delta` to `total`.
    ScoreChanged { delta: i64, total: i64 },
    /// An enemy entered the arena.
    EnemySpawned,
    /// An enemy was shot down.
    EnemyDestroyed,
    /// A turret was destroyed.
    TurretDestroyed,
    /// The player ship was destroyed; the game-over menu takes over.
    GameOver,
}
