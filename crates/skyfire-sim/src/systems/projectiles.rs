//! Projectile advance and offscreen culling.
//!
//! Pure linear motion: `position += dir * speed` each tick; the direction
//! was fixed at creation. Projectiles are removed once they are more than
//! the offscreen margin outside the arena on any side.

use hecs::{Entity, World};

use skyfire_core::components::{Position, ProjectileState};
use skyfire_core::constants::OFFSCREEN_MARGIN;
use skyfire_core::types::ArenaSize;

/// Advance every projectile and despawn the ones that left the arena.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, arena: ArenaSize, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (proj, pos)) in world.query_mut::<(&ProjectileState, &mut Position)>() {
        pos.0 += proj.dir * proj.speed;
        if !arena.contains_with_margin(pos.0, OFFSCREEN_MARGIN) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
