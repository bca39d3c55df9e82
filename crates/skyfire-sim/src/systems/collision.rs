//! Collision resolution — pairwise AABB checks in a fixed priority order,
//! with damage, scoring, and game-over side effects.
//!
//! Removal is mark-and-sweep: entities are collected into hit sets during
//! the passes and despawned once at the end, so no pass ever observes a
//! half-mutated collection. The instant the player's health reaches zero
//! the remaining passes are skipped; the session transitions to game over.

use std::collections::HashSet;

use hecs::{Entity, World};
use log::{info, trace};

use skyfire_core::components::{
    Collider, EnemyAi, Health, PlayerShip, Position, ProjectileState, TurretState,
};
use skyfire_core::constants::{
    ENEMY_SHOT_DAMAGE, PLAYER_SHOT_DAMAGE, SCORE_ENEMY_KILL, SCORE_TURRET_KILL,
    TURRET_SHOT_DAMAGE,
};
use skyfire_core::enums::{EnemyState, ProjectileKind};
use skyfire_core::events::GameEvent;
use skyfire_core::state::ScoreState;
use skyfire_core::types::Rect;

/// Result of one collision pass.
pub struct Outcome {
    pub player_destroyed: bool,
}

pub fn run(
    world: &mut World,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Outcome {
    let player = {
        let mut query = world.query::<(&PlayerShip, &Position, &Collider)>();
        query
            .iter()
            .next()
            .map(|(entity, (_ship, pos, col))| (entity, col.bounds_at(pos.0)))
    };
    let Some((player, player_bounds)) = player else {
        return Outcome {
            player_destroyed: false,
        };
    };

    // Snapshot bounds up front: all passes within one tick see consistent
    // geometry regardless of removal order.
    let enemies: Vec<(Entity, Rect, i32)> = {
        let mut query = world.query::<(&EnemyAi, &Position, &Collider)>();
        query
            .iter()
            .filter(|(_e, (ai, _, _))| ai.state != EnemyState::Destroyed)
            .map(|(e, (ai, pos, col))| (e, col.bounds_at(pos.0), ai.contact_damage))
            .collect()
    };
    let turrets: Vec<(Entity, Rect)> = {
        let mut query = world.query::<(&TurretState, &Position, &Collider)>();
        query
            .iter()
            .map(|(e, (_t, pos, col))| (e, col.bounds_at(pos.0)))
            .collect()
    };
    let mut player_shots: Vec<(Entity, Rect)> = Vec::new();
    let mut enemy_shots: Vec<(Entity, Rect)> = Vec::new();
    let mut turret_shots: Vec<(Entity, Rect)> = Vec::new();
    {
        let mut query = world.query::<(&ProjectileState, &Position, &Collider)>();
        for (entity, (proj, pos, col)) in query.iter() {
            let bounds = col.bounds_at(pos.0);
            match proj.kind {
                ProjectileKind::PlayerShot => player_shots.push((entity, bounds)),
                ProjectileKind::EnemyShot => enemy_shots.push((entity, bounds)),
                ProjectileKind::TurretShot => turret_shots.push((entity, bounds)),
            }
        }
    }

    let mut consumed_shots: HashSet<Entity> = HashSet::new();
    let mut dead_enemies: HashSet<Entity> = HashSet::new();
    let mut dead_turrets: HashSet<Entity> = HashSet::new();
    let mut player_destroyed = false;

    // (a) Player vs enemies: kamikaze. The enemy is removed unconditionally
    // on body contact, whether or not the player survives.
    for (enemy, bounds, contact_damage) in &enemies {
        if player_destroyed {
            break;
        }
        if bounds.intersects(&player_bounds) {
            dead_enemies.insert(*enemy);
            let hp = apply_damage(world, player, *contact_damage);
            events.push(GameEvent::HealthChanged { value: hp });
            player_destroyed = hp <= 0;
        }
    }

    // (b) Player shots vs enemies.
    if !player_destroyed {
        'enemies: for (enemy, enemy_bounds, _) in &enemies {
            if dead_enemies.contains(enemy) {
                continue;
            }
            for (shot, shot_bounds) in &player_shots {
                if consumed_shots.contains(shot) {
                    continue;
                }
                if enemy_bounds.intersects(shot_bounds) {
                    consumed_shots.insert(*shot);
                    let hp = apply_damage(world, *enemy, PLAYER_SHOT_DAMAGE);
                    if hp <= 0 {
                        dead_enemies.insert(*enemy);
                        score.enemies_destroyed += 1;
                        award(score, events, SCORE_ENEMY_KILL);
                        events.push(GameEvent::EnemyDestroyed);
                        // Enemy is gone; later shots no longer test it.
                        continue 'enemies;
                    }
                }
            }
        }
    }

    // (c) Enemy shots vs player.
    if !player_destroyed {
        for (shot, shot_bounds) in &enemy_shots {
            if shot_bounds.intersects(&player_bounds) {
                consumed_shots.insert(*shot);
                let hp = apply_damage(world, player, ENEMY_SHOT_DAMAGE);
                events.push(GameEvent::HealthChanged { value: hp });
                if hp <= 0 {
                    player_destroyed = true;
                    break;
                }
            }
        }
    }

    // (d) Turret shots vs player.
    if !player_destroyed {
        for (shot, shot_bounds) in &turret_shots {
            if shot_bounds.intersects(&player_bounds) {
                consumed_shots.insert(*shot);
                let hp = apply_damage(world, player, TURRET_SHOT_DAMAGE);
                events.push(GameEvent::HealthChanged { value: hp });
                if hp <= 0 {
                    player_destroyed = true;
                    break;
                }
            }
        }
    }

    // (e) Player shots vs turrets. Each shot hits at most one turret per
    // tick, even when turrets overlap.
    if !player_destroyed {
        for (shot, shot_bounds) in &player_shots {
            if consumed_shots.contains(shot) {
                continue;
            }
            for (turret, turret_bounds) in &turrets {
                if dead_turrets.contains(turret) {
                    continue;
                }
                if shot_bounds.intersects(turret_bounds) {
                    consumed_shots.insert(*shot);
                    let hp = apply_damage(world, *turret, PLAYER_SHOT_DAMAGE);
                    if hp <= 0 {
                        dead_turrets.insert(*turret);
                        score.turrets_destroyed += 1;
                        award(score, events, SCORE_TURRET_KILL);
                        events.push(GameEvent::TurretDestroyed);
                    }
                    break;
                }
            }
        }
    }

    // (g) Player vs turrets: contact is detected but applies no damage.
    // TODO: push the ship out of the turret instead of allowing overlap.
    if !player_destroyed {
        for (_turret, turret_bounds) in &turrets {
            if turret_bounds.intersects(&player_bounds) {
                trace!("player overlapping turret");
            }
        }
    }

    despawn_buffer.clear();
    despawn_buffer.extend(consumed_shots.iter().copied());
    despawn_buffer.extend(dead_enemies.iter().copied());
    despawn_buffer.extend(dead_turrets.iter().copied());
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if player_destroyed {
        info!("player ship destroyed, session over");
    }
    Outcome { player_destroyed }
}

/// Subtract `amount` from the entity's health and return what remains.
fn apply_damage(world: &mut World, entity: Entity, amount: i32) -> i32 {
    match world.query_one_mut::<&mut Health>(entity) {
        Ok(health) => {
            health.0 -= amount;
            health.0
        }
        Err(_) => i32::MAX,
    }
}

fn award(score: &mut ScoreState, events: &mut Vec<GameEvent>, delta: i64) {
    score.score += delta;
    events.push(GameEvent::ScoreChanged {
        delta,
        total: score.score,
    });
}
