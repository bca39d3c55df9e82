//! Player commands sent from the input/menu layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::{MoveKey, ShipClass};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session lifecycle ---
    /// Ship chosen in the selection menu; starts a session.
    SelectShip { class: ShipClass },
    /// Restart after game over with the same ship class.
    Restart,
    /// Tear the session down and hand control back to ship selection.
    ReturnToMenu,

    // --- Input state ---
    /// A tracked movement key went down.
    KeyDown { key: MoveKey },
    /// A tracked movement key went up.
    KeyUp { key: MoveKey },
    /// Cursor moved, in arena-local coordinates.
    CursorMoved { x: f32, y: f32 },
    /// Fire a player shot toward the current cursor position.
    Fire,

    // --- Environment ---
    /// The window was resized; bounds checks use the new size next tick.
    SetArenaSize { width: f32, height: f32 },
}
