//! Enemy aircraft behavior: homing pursuit with a deceleration zone,
//! rotation smoothing under a per-tick turn cap, and timed fire at the
//! player's current position.

use glam::Vec2;
use hecs::World;
use log::{debug, warn};

use skyfire_core::components::{EnemyAi, Position, Rotation};
use skyfire_core::constants::{ENEMY_CHASE_DEADZONE, ENEMY_DECEL_RANGE, ENEMY_TURN_RATE_DEG};
use skyfire_core::enums::{EnemyState, ProjectileKind};
use skyfire_core::types::angle_difference_deg;

use crate::sprites::SpriteCatalog;
use crate::world_setup::{self, Aim};

pub fn run(world: &mut World, sprites: &mut SpriteCatalog, current_tick: u64) {
    let Some(target) = world_setup::player_position(world) else {
        return;
    };

    // Shot spawns are buffered: spawning mid-query would alias the world.
    let mut shots: Vec<(Vec2, f32)> = Vec::new();

    for (_entity, (ai, pos, rot)) in
        world.query_mut::<(&mut EnemyAi, &mut Position, &mut Rotation)>()
    {
        match ai.state {
            EnemyState::Spawned => {
                // First tick is activation only.
                ai.state = EnemyState::Active;
                debug!("enemy activated at {}", pos.0);
                continue;
            }
            EnemyState::Destroyed => continue,
            EnemyState::Active => {}
        }

        let to_target = target - pos.0;
        let distance = to_target.length();

        // Full speed beyond the deceleration range, scaling down linearly
        // inside it; inside the dead zone the enemy holds position.
        if distance > ENEMY_CHASE_DEADZONE {
            let dir = to_target / distance;
            let factor = (distance / ENEMY_DECEL_RANGE).min(1.0);
            pos.0 += dir * ai.speed * factor;
        }

        if distance > f32::EPSILON {
            let desired = to_target.y.atan2(to_target.x).to_degrees();
            let diff = angle_difference_deg(rot.0, desired);
            if diff.abs() < ENEMY_TURN_RATE_DEG {
                rot.0 = desired;
            } else {
                rot.0 += ENEMY_TURN_RATE_DEG * diff.signum();
            }
        }

        if current_tick.saturating_sub(ai.last_fire_tick) >= ai.fire_interval_ticks {
            ai.last_fire_tick = current_tick;
            let aim = target - pos.0;
            let angle = aim.y.atan2(aim.x).to_degrees();
            shots.push((pos.0, angle));
        }
    }

    for (origin, angle) in shots {
        if let Err(e) =
            world_setup::spawn_projectile(world, sprites, ProjectileKind::EnemyShot, origin, Aim::Angle(angle))
        {
            warn!("enemy shot skipped: {e}");
        }
    }
}
