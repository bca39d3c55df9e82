//! Turret fire control: facing pass-through and the slow fire timer.
//!
//! Turrets have no internal update; their rotation is recomputed here each
//! tick toward the live player, and shots leave at the current angle on a
//! fixed cadence independent of the main tick rate.

use glam::Vec2;
use hecs::World;
use log::warn;

use skyfire_core::components::{Position, Rotation, TurretState};
use skyfire_core::enums::ProjectileKind;

use crate::sprites::SpriteCatalog;
use crate::world_setup::{self, Aim};

/// Point every turret at the player. No-op when the player is gone.
pub fn aim(world: &mut World) {
    let Some(target) = world_setup::player_position(world) else {
        return;
    };

    for (_entity, (_turret, pos, rot)) in
        world.query_mut::<(&TurretState, &Position, &mut Rotation)>()
    {
        let to_target = target - pos.0;
        if to_target != Vec2::ZERO {
            rot.0 = to_target.y.atan2(to_target.x).to_degrees();
        }
    }
}

/// Fire one shot from each turret whose interval has elapsed.
pub fn run_fire(world: &mut World, sprites: &mut SpriteCatalog, current_tick: u64) {
    let mut shots: Vec<(Vec2, f32)> = Vec::new();

    for (_entity, (turret, pos, rot)) in
        world.query_mut::<(&mut TurretState, &Position, &Rotation)>()
    {
        if current_tick.saturating_sub(turret.last_fire_tick) >= turret.fire_interval_ticks {
            turret.last_fire_tick = current_tick;
            shots.push((pos.0, rot.0));
        }
    }

    for (origin, angle) in shots {
        if let Err(e) = world_setup::spawn_projectile(
            world,
            sprites,
            ProjectileKind::TurretShot,
            origin,
            Aim::Angle(angle),
        ) {
            warn!("turret shot skipped: {e}");
        }
    }
}
