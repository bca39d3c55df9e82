//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs
//! all systems in a fixed order, and produces `GameStateSnapshot`s. All
//! state mutation happens inside `tick`, so the single-threaded event-loop
//! semantics of the session hold by construction: no tick overlaps another,
//! and stopping the caller's tick source stops every timer at once.

use std::collections::VecDeque;

use hecs::World;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyfire_core::commands::PlayerCommand;
use skyfire_core::constants::{PLAYER_MUZZLE_OFFSET, PLAYER_START_HEALTH};
use skyfire_core::enums::{GamePhase, ProjectileKind, ShipClass};
use skyfire_core::events::GameEvent;
use skyfire_core::silhouette::SilhouetteStore;
use skyfire_core::state::{GameStateSnapshot, ScoreState};
use skyfire_core::types::{ArenaSize, SimTime};

use crate::input::InputState;
use crate::sprites::SpriteCatalog;
use crate::systems;
use crate::systems::spawner::EnemySpawnTimer;
use crate::world_setup::{self, Aim};

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial arena size (resizable later via `SetArenaSize`).
    pub arena: ArenaSize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: ArenaSize::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    arena: ArenaSize,
    rng: ChaCha8Rng,
    sprites: SpriteCatalog,
    input: InputState,
    score: ScoreState,
    ship_class: ShipClass,
    spawn_timer: EnemySpawnTimer,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine with the given config and silhouette source.
    pub fn new(config: SimConfig, store: Box<dyn SilhouetteStore>) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            arena: config.arena,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            sprites: SpriteCatalog::new(store),
            input: InputState::default(),
            score: ScoreState::default(),
            ship_class: ShipClass::default(),
            spawn_timer: EnemySpawnTimer::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Outside the Active phase only commands are processed; no timer fires.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, self.time, self.phase, self.arena, self.score, events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn arena(&self) -> ArenaSize {
        self.arena
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectShip { class } => {
                if self.phase == GamePhase::ShipSelect {
                    self.start_session(class);
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.start_session(self.ship_class);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::ShipSelect {
                    self.teardown();
                }
            }
            PlayerCommand::KeyDown { key } => self.input.key_down(key),
            PlayerCommand::KeyUp { key } => self.input.key_up(key),
            PlayerCommand::CursorMoved { x, y } => self.input.cursor_moved(x, y),
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Active {
                    self.fire_player_shot();
                }
            }
            PlayerCommand::SetArenaSize { width, height } => {
                self.arena = ArenaSize::new(width, height);
            }
        }
    }

    /// Build a fresh session world for the chosen ship class. Equivalent to
    /// a restart: every transient collection is gone, health and score are
    /// back at their starting values, and all timers run from zero.
    fn start_session(&mut self, class: ShipClass) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.input.release_all();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.spawn_timer = EnemySpawnTimer::default();
        self.ship_class = class;

        if let Err(e) = world_setup::spawn_player(&mut self.world, &mut self.sprites, class, self.arena)
        {
            // Player ship failure is session-fatal: abort back to selection.
            error!("session start aborted, player ship unavailable: {e}");
            self.world.clear();
            self.phase = GamePhase::ShipSelect;
            return;
        }
        world_setup::spawn_turrets(&mut self.world, &mut self.sprites, self.arena);

        self.phase = GamePhase::Active;
        self.events.push(GameEvent::ShipChosen { class });
        self.events.push(GameEvent::HealthChanged {
            value: PLAYER_START_HEALTH,
        });
        info!("session started with {:?}", class);
    }

    /// Tear the session down and hand control back to ship selection.
    fn teardown(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.input.release_all();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.phase = GamePhase::ShipSelect;
    }

    /// Spawn a player shot from the ship's muzzle toward the cursor.
    fn fire_player_shot(&mut self) {
        let Some((origin, scale)) = ({
            let mut query = self
                .world
                .query::<(&skyfire_core::components::PlayerShip, &skyfire_core::components::Position, &skyfire_core::components::Sprite)>();
            query
                .iter()
                .next()
                .map(|(_e, (_ship, pos, sprite))| (pos.0, sprite.scale))
        }) else {
            return;
        };

        let muzzle = glam::Vec2::new(origin.x, origin.y - PLAYER_MUZZLE_OFFSET * scale);
        if let Err(e) = world_setup::spawn_projectile(
            &mut self.world,
            &mut self.sprites,
            ProjectileKind::PlayerShot,
            muzzle,
            Aim::Target(self.input.cursor()),
        ) {
            error!("player shot skipped: {e}");
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Movement controller tick + cursor facing.
        systems::movement::run(&mut self.world, &self.input, self.arena);
        // 2. Advance every projectile, cull offscreen ones.
        systems::projectiles::run(&mut self.world, self.arena, &mut self.despawn_buffer);
        // 3. Enemy pursuit, rotation smoothing, timed fire.
        systems::enemy_ai::run(&mut self.world, &mut self.sprites, self.time.tick);
        // 4. Turret facing toward the player.
        systems::fire_control::aim(&mut self.world);
        // 5. Turret fire on its own slower cadence.
        systems::fire_control::run_fire(&mut self.world, &mut self.sprites, self.time.tick);
        // 6. Periodic enemy spawn.
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.sprites,
            &mut self.spawn_timer,
            self.time.tick,
            self.arena,
            &mut self.events,
        );
        // 7. Collision resolution, scoring, game-over detection.
        let outcome = systems::collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        if outcome.player_destroyed {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
        }
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: glam::Vec2) -> hecs::Entity {
        let target = world_setup::player_position(&self.world).unwrap_or(glam::Vec2::ZERO);
        world_setup::spawn_enemy(
            &mut self.world,
            &mut self.sprites,
            &mut self.rng,
            self.time.tick,
            position,
            target,
        )
        .expect("test enemy spawn")
    }

    /// Spawn a projectile of any kind at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        kind: ProjectileKind,
        origin: glam::Vec2,
        aim: Aim,
    ) -> hecs::Entity {
        world_setup::spawn_projectile(&mut self.world, &mut self.sprites, kind, origin, aim)
            .expect("test projectile spawn")
    }

    /// Spawn an extra turret at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_turret(&mut self, position: glam::Vec2) -> hecs::Entity {
        world_setup::spawn_turret(&mut self.world, &mut self.sprites, position)
            .expect("test turret spawn")
    }

    /// Overwrite the player's health (for tests).
    #[cfg(test)]
    pub fn set_player_health(&mut self, value: i32) {
        use skyfire_core::components::{Health, PlayerShip};
        for (_e, (_ship, health)) in self.world.query_mut::<(&PlayerShip, &mut Health)>() {
            health.0 = value;
        }
    }
}
