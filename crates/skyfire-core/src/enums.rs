//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Selectable player ship classes. Purely cosmetic for the simulation core;
/// each class maps to its own silhouette asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    #[default]
    Interceptor,
    Striker,
    Phantom,
}

/// Who fired a projectile. Determines damage, targets, and silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Fired by the player, aimed at the cursor.
    PlayerShot,
    /// Fired by a turret at its current facing angle.
    TurretShot,
    /// Fired by an enemy aircraft at the player's position.
    EnemyShot,
}

/// Enemy lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Just spawned; becomes Active on its first tick.
    #[default]
    Spawned,
    /// Pursuing and firing at the player.
    Active,
    /// Killed or expended in a kamikaze collision; awaiting despawn.
    Destroyed,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship-selection menu is in control; no simulation runs.
    #[default]
    ShipSelect,
    Active,
    /// Player destroyed. All timers stopped; menu collaborator in control.
    GameOver,
}

/// Movement keys tracked by the input layer. WASD and the arrow keys are
/// both tracked; `axis_contribution` aliases them onto the same axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    /// Unit contribution of this key to the movement vector.
    /// +y is down in screen coordinates.
    pub fn axis_contribution(self) -> Vec2 {
        match self {
            MoveKey::W | MoveKey::Up => Vec2::new(0.0, -1.0),
            MoveKey::S | MoveKey::Down => Vec2::new(0.0, 1.0),
            MoveKey::A | MoveKey::Left => Vec2::new(-1.0, 0.0),
            MoveKey::D | MoveKey::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Key for looking up silhouette data in a [`SilhouetteStore`].
///
/// [`SilhouetteStore`]: crate::silhouette::SilhouetteStore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKey {
    Ship(ShipClass),
    Enemy,
    Turret,
    Projectile(ProjectileKind),
}

impl AssetKey {
    /// Relative asset folder for directory-backed stores.
    pub fn folder(&self) -> String {
        match self {
            AssetKey::Ship(ShipClass::Interceptor) => "ships/interceptor".into(),
            AssetKey::Ship(ShipClass::Striker) => "ships/striker".into(),
            AssetKey::Ship(ShipClass::Phantom) => "ships/phantom".into(),
            AssetKey::Enemy => "enemy".into(),
            AssetKey::Turret => "turret".into(),
            AssetKey::Projectile(ProjectileKind::PlayerShot) => "projectiles/player".into(),
            AssetKey::Projectile(ProjectileKind::TurretShot) => "projectiles/turret".into(),
            AssetKey::Projectile(ProjectileKind::EnemyShot) => "projectiles/enemy".into(),
        }
    }
}
