//! Builds the per-tick `GameStateSnapshot` from the ECS world.

use hecs::World;

use skyfire_core::components::{
    EnemyAi, Health, PlayerShip, Position, ProjectileState, Rotation, Sprite, TurretState,
};
use skyfire_core::enums::GamePhase;
use skyfire_core::events::GameEvent;
use skyfire_core::state::{
    EnemyView, GameStateSnapshot, PlayerView, ProjectileView, ScoreState, TurretView,
};
use skyfire_core::types::{ArenaSize, SimTime};

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    arena: ArenaSize,
    score: ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = {
        let mut query = world.query::<(&PlayerShip, &Position, &Rotation, &Health, &Sprite)>();
        query
            .iter()
            .next()
            .map(|(_e, (ship, pos, rot, health, sprite))| PlayerView {
                class: ship.class,
                position: pos.0,
                rotation_deg: rot.0,
                health: health.0,
                scale: sprite.scale,
            })
    };

    let enemies = {
        let mut query = world.query::<(&EnemyAi, &Position, &Rotation, &Health, &Sprite)>();
        query
            .iter()
            .map(|(_e, (ai, pos, rot, health, sprite))| EnemyView {
                position: pos.0,
                rotation_deg: rot.0,
                health: health.0,
                state: ai.state,
                scale: sprite.scale,
            })
            .collect()
    };

    let turrets = {
        let mut query = world.query::<(&TurretState, &Position, &Rotation, &Health, &Sprite)>();
        query
            .iter()
            .map(|(_e, (_t, pos, rot, health, sprite))| TurretView {
                position: pos.0,
                rotation_deg: rot.0,
                health: health.0,
                scale: sprite.scale,
            })
            .collect()
    };

    let projectiles = {
        let mut query = world.query::<(&ProjectileState, &Position, &Rotation, &Sprite)>();
        query
            .iter()
            .map(|(_e, (proj, pos, rot, sprite))| ProjectileView {
                kind: proj.kind,
                position: pos.0,
                rotation_deg: rot.0,
                scale: sprite.scale,
            })
            .collect()
    };

    GameStateSnapshot {
        time,
        phase,
        arena,
        score,
        player,
        enemies,
        turrets,
        projectiles,
        events,
    }
}
