//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, turrets, enemies, and projectiles with
//! appropriate component bundles. Every factory resolves its silhouette
//! through the sprite catalog first; a missing asset fails the spawn and
//! the caller decides whether that is fatal (player) or skippable.

use glam::Vec2;
use hecs::World;
use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfire_core::components::*;
use skyfire_core::constants::*;
use skyfire_core::enums::{AssetKey, EnemyState, ProjectileKind, ShipClass};
use skyfire_core::silhouette::AssetError;
use skyfire_core::types::ArenaSize;

use crate::sprites::SpriteCatalog;

/// How a projectile's fixed direction is resolved at creation.
pub enum Aim {
    /// Normalize toward a target point (player shots toward the cursor).
    Target(Vec2),
    /// Explicit angle in degrees (turret and enemy shots).
    Angle(f32),
    /// Straight up (player shot with no usable target).
    Forward,
}

/// Spawn the player ship at the default spawn point.
pub fn spawn_player(
    world: &mut World,
    sprites: &mut SpriteCatalog,
    class: ShipClass,
    arena: ArenaSize,
) -> Result<hecs::Entity, AssetError> {
    let (width, height) = sprites.measure(AssetKey::Ship(class))?;
    let position = Vec2::new(
        arena.width / 2.0,
        arena.height - PLAYER_SPAWN_BOTTOM_OFFSET,
    );

    Ok(world.spawn((
        PlayerShip { class },
        Position(position),
        Rotation(-90.0),
        Health(PLAYER_START_HEALTH),
        PlayerControl {
            speed: PLAYER_MAX_SPEED * PLAYER_IDLE_SPEED_FACTOR,
        },
        Collider {
            half: Vec2::new(width, height) * PLAYER_SCALE / 2.0,
        },
        Sprite {
            asset: AssetKey::Ship(class),
            width,
            height,
            scale: PLAYER_SCALE,
        },
    )))
}

/// Spawn the two session turrets, one near each top corner.
/// A turret whose silhouette fails to load is skipped, not fatal.
pub fn spawn_turrets(world: &mut World, sprites: &mut SpriteCatalog, arena: ArenaSize) {
    let positions = [
        Vec2::new(TURRET_LEFT_X, TURRET_Y),
        Vec2::new(arena.width - TURRET_RIGHT_INSET, TURRET_Y),
    ];
    for position in positions {
        if let Err(e) = spawn_turret(world, sprites, position) {
            warn!("turret at {position} skipped: {e}");
        }
    }
}

/// Spawn a single stationary turret.
pub fn spawn_turret(
    world: &mut World,
    sprites: &mut SpriteCatalog,
    position: Vec2,
) -> Result<hecs::Entity, AssetError> {
    let (width, height) = sprites.measure(AssetKey::Turret)?;

    Ok(world.spawn((
        TurretState {
            fire_interval_ticks: TURRET_FIRE_INTERVAL_TICKS,
            last_fire_tick: 0,
        },
        Position(position),
        Rotation(90.0),
        Health(TURRET_HEALTH),
        Collider {
            half: Vec2::new(width, height) * TURRET_SCALE / 2.0,
        },
        Sprite {
            asset: AssetKey::Turret,
            width,
            height,
            scale: TURRET_SCALE,
        },
    )))
}

/// Spawn a single enemy aircraft facing its target from the start.
/// The fire interval is randomized per instance.
pub fn spawn_enemy(
    world: &mut World,
    sprites: &mut SpriteCatalog,
    rng: &mut ChaCha8Rng,
    current_tick: u64,
    position: Vec2,
    target: Vec2,
) -> Result<hecs::Entity, AssetError> {
    let (width, height) = sprites.measure(AssetKey::Enemy)?;

    let to_target = target - position;
    let rotation = if to_target != Vec2::ZERO {
        to_target.y.atan2(to_target.x).to_degrees()
    } else {
        90.0
    };

    Ok(world.spawn((
        EnemyAi {
            state: EnemyState::Spawned,
            speed: ENEMY_SPEED,
            contact_damage: ENEMY_CONTACT_DAMAGE,
            fire_interval_ticks: rng
                .gen_range(ENEMY_FIRE_INTERVAL_MIN_TICKS..=ENEMY_FIRE_INTERVAL_MAX_TICKS),
            last_fire_tick: current_tick,
        },
        Position(position),
        Rotation(rotation),
        Health(ENEMY_HEALTH),
        Collider {
            half: Vec2::new(width, height) * ENEMY_SCALE / 2.0,
        },
        Sprite {
            asset: AssetKey::Enemy,
            width,
            height,
            scale: ENEMY_SCALE,
        },
    )))
}

/// Spawn a projectile of the given kind at `origin`.
///
/// The direction is resolved once here and never changes afterwards.
/// Fails (and creates nothing) if the silhouette for the kind is missing.
pub fn spawn_projectile(
    world: &mut World,
    sprites: &mut SpriteCatalog,
    kind: ProjectileKind,
    origin: Vec2,
    aim: Aim,
) -> Result<hecs::Entity, AssetError> {
    let (width, height) = sprites.measure(AssetKey::Projectile(kind))?;

    let (dir, rotation) = match aim {
        Aim::Target(target) => {
            let delta = target - origin;
            let len = delta.length();
            if len > 0.0 {
                let dir = delta / len;
                (dir, dir.y.atan2(dir.x).to_degrees())
            } else {
                (Vec2::new(0.0, -1.0), -90.0)
            }
        }
        Aim::Angle(degrees) => {
            let radians = degrees.to_radians();
            (Vec2::new(radians.cos(), radians.sin()), degrees)
        }
        Aim::Forward => (Vec2::new(0.0, -1.0), -90.0),
    };

    Ok(world.spawn((
        ProjectileState {
            kind,
            dir,
            speed: PROJECTILE_SPEED,
        },
        Position(origin),
        Rotation(rotation),
        Collider::square(PROJECTILE_COLLISION_SIZE * PROJECTILE_SCALE),
        Sprite {
            asset: AssetKey::Projectile(kind),
            width,
            height,
            scale: PROJECTILE_SCALE,
        },
    )))
}

/// Center position of the live player ship, if any.
pub fn player_position(world: &World) -> Option<Vec2> {
    let mut query = world.query::<(&PlayerShip, &Position)>();
    query.iter().next().map(|(_e, (_ship, pos))| pos.0)
}
