//! Player movement controller and cursor-facing update.
//!
//! Maps the held-key snapshot to an accelerating, friction-based
//! displacement, clamps the ship into the arena, and recomputes facing
//! toward the cursor. Facing updates even while stationary.

use hecs::World;

use skyfire_core::components::{PlayerControl, PlayerShip, Position, Rotation, Sprite};
use skyfire_core::constants::{
    PLAYER_ACCELERATION, PLAYER_CLAMP_MARGIN_FACTOR, PLAYER_IDLE_SPEED_FACTOR, PLAYER_MAX_SPEED,
};
use skyfire_core::types::ArenaSize;

use crate::input::InputState;

pub fn run(world: &mut World, input: &InputState, arena: ArenaSize) {
    for (_entity, (_ship, pos, rot, ctrl, sprite)) in world.query_mut::<(
        &PlayerShip,
        &mut Position,
        &mut Rotation,
        &mut PlayerControl,
        &Sprite,
    )>() {
        let axis = input.axis();
        if axis != glam::Vec2::ZERO {
            ctrl.speed = (ctrl.speed + PLAYER_ACCELERATION).min(PLAYER_MAX_SPEED);
            pos.0 += axis.normalize() * ctrl.speed;
        } else {
            // Friction baseline: no displacement, but the next ramp-up
            // starts from here instead of zero.
            ctrl.speed = PLAYER_MAX_SPEED * PLAYER_IDLE_SPEED_FACTOR;
        }

        let margin = PLAYER_CLAMP_MARGIN_FACTOR * sprite.scale;
        pos.0.x = pos.0.x.min(arena.width - margin).max(margin);
        pos.0.y = pos.0.y.min(arena.height - margin).max(margin);

        let to_cursor = input.cursor() - pos.0;
        if to_cursor != glam::Vec2::ZERO {
            rot.0 = to_cursor.y.atan2(to_cursor.x).to_degrees();
        }
    }
}
