//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in the systems of skyfire-sim.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AssetKey, EnemyState, ProjectileKind, ShipClass};
use crate::types::Rect;

/// World position of an entity's center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Facing angle in degrees. 0 points along +x, increasing clockwise on
/// screen (since +y is down). The renderer adds the fixed sprite offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub f32);

/// Hit points. Reaching zero triggers destruction exactly once (the systems
/// mark the entity for despawn in the same pass that drops it to zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health(pub i32);

/// Collision box half-extents. Every collidable entity carries one, so
/// collision checks treat ships, turrets, enemies, and projectiles
/// uniformly instead of duplicating per-type bounds logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub half: Vec2,
}

impl Collider {
    /// Square collider with the given full side length.
    pub fn square(side: f32) -> Self {
        Self {
            half: Vec2::splat(side / 2.0),
        }
    }

    /// Bounds centered on `center`.
    pub fn bounds_at(&self, center: Vec2) -> Rect {
        Rect::centered_at(center, self.half.x * 2.0, self.half.y * 2.0)
    }
}

/// Render-facing sprite info: which silhouette and at what size.
/// `width`/`height` are the unscaled silhouette extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub asset: AssetKey,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

/// Marks the player-controlled ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip {
    pub class: ShipClass,
}

/// Movement controller ramp state for the player ship. Position is mutated
/// exclusively by the movement system; the ship never self-moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerControl {
    /// Current ramp speed (units per tick).
    pub speed: f32,
}

/// Marks an enemy aircraft and carries its pursuit/firing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyAi {
    pub state: EnemyState,
    /// Base pursuit speed (units per tick).
    pub speed: f32,
    /// Damage dealt to the player on body contact.
    pub contact_damage: i32,
    /// Ticks between shots, fixed per instance at spawn.
    pub fire_interval_ticks: u64,
    /// Tick of the most recent shot (spawn tick initially).
    pub last_fire_tick: u64,
}

/// Marks a stationary turret. Position is immutable after construction;
/// only the facing angle changes, recomputed by the session each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurretState {
    /// Ticks between shots.
    pub fire_interval_ticks: u64,
    /// Tick of the most recent shot (spawn tick initially).
    pub last_fire_tick: u64,
}

/// A projectile in flight. The direction is resolved once at creation and
/// never changes; only position advances, by `dir * speed` per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    pub kind: ProjectileKind,
    /// Unit travel direction.
    pub dir: Vec2,
    /// Units per tick.
    pub speed: f32,
}
