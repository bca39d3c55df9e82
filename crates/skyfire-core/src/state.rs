//! Game state snapshot — the complete render-facing state built each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyState, GamePhase, ProjectileKind, ShipClass};
use crate::events::GameEvent;
use crate::types::{ArenaSize, SimTime};

/// Complete game state handed to the renderer/HUD after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub arena: ArenaSize,
    pub score: ScoreState,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub turrets: Vec<TurretView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events since the previous snapshot, drained each tick.
    pub events: Vec<GameEvent>,
}

/// Running score, also kept as engine state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: i64,
    pub enemies_destroyed: u32,
    pub turrets_destroyed: u32,
}

/// Player ship as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub class: ShipClass,
    pub position: Vec2,
    /// Facing in degrees; the renderer adds the sprite offset.
    pub rotation_deg: f32,
    pub health: i32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub health: i32,
    pub state: EnemyState,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurretView {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub health: i32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
}
