//! Periodic enemy spawning near the top of the arena.

use glam::Vec2;
use hecs::World;
use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfire_core::constants::{
    ENEMY_SPAWN_INTERVAL_TICKS, ENEMY_SPAWN_MARGIN_X, ENEMY_SPAWN_Y_MAX, ENEMY_SPAWN_Y_MIN,
};
use skyfire_core::events::GameEvent;
use skyfire_core::types::ArenaSize;

use crate::sprites::SpriteCatalog;
use crate::world_setup;

/// Tracks when the last enemy entered the arena. Reset on session start.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnemySpawnTimer {
    pub last_spawn_tick: u64,
}

/// Spawn one enemy every interval, at a random x within the arena and a
/// fixed near-top y band. Construction failures are logged and skipped.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    sprites: &mut SpriteCatalog,
    timer: &mut EnemySpawnTimer,
    current_tick: u64,
    arena: ArenaSize,
    events: &mut Vec<GameEvent>,
) {
    if current_tick.saturating_sub(timer.last_spawn_tick) < ENEMY_SPAWN_INTERVAL_TICKS {
        return;
    }
    timer.last_spawn_tick = current_tick;

    let x = rng.gen_range(ENEMY_SPAWN_MARGIN_X..(arena.width - ENEMY_SPAWN_MARGIN_X).max(ENEMY_SPAWN_MARGIN_X + 1.0));
    let y = rng.gen_range(ENEMY_SPAWN_Y_MIN..ENEMY_SPAWN_Y_MAX);
    let position = Vec2::new(x, y);
    let target = world_setup::player_position(world).unwrap_or(Vec2::ZERO);

    match world_setup::spawn_enemy(world, sprites, rng, current_tick, position, target) {
        Ok(_) => events.push(GameEvent::EnemySpawned),
        Err(e) => warn!("enemy spawn skipped: {e}"),
    }
}
