//! Held-key and cursor state, fed by `KeyDown`/`KeyUp`/`CursorMoved`
//! commands and read as a snapshot by the movement system each tick.

use std::collections::HashMap;

use glam::Vec2;

use skyfire_core::enums::MoveKey;

const TRACKED_KEYS: [MoveKey; 8] = [
    MoveKey::W,
    MoveKey::A,
    MoveKey::S,
    MoveKey::D,
    MoveKey::Up,
    MoveKey::Down,
    MoveKey::Left,
    MoveKey::Right,
];

/// Current pressed-key set and cursor position in arena-local coordinates.
#[derive(Debug, Clone)]
pub struct InputState {
    pressed: HashMap<MoveKey, bool>,
    cursor: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pressed: TRACKED_KEYS.iter().map(|&k| (k, false)).collect(),
            cursor: Vec2::ZERO,
        }
    }
}

impl InputState {
    pub fn key_down(&mut self, key: MoveKey) {
        self.pressed.insert(key, true);
    }

    pub fn key_up(&mut self, key: MoveKey) {
        self.pressed.insert(key, false);
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Sum of unit contributions from all held keys, clamped per axis so
    /// W and Up (etc.) alias to the same direction instead of stacking.
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        for (&key, &down) in &self.pressed {
            if down {
                axis += key.axis_contribution();
            }
        }
        axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
    }

    /// Drop all held keys (session teardown/start).
    pub fn release_all(&mut self) {
        for down in self.pressed.values_mut() {
            *down = false;
        }
    }
}
