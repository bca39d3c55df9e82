//! Simulation constants and tuning parameters.
//!
//! Damage values, fire intervals, and speed caps are named here rather than
//! inlined so tests can reference the same numbers the systems use.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Default arena width in units (pre-resize).
pub const ARENA_WIDTH: f32 = 1920.0;

/// Default arena height in units (pre-resize).
pub const ARENA_HEIGHT: f32 = 1080.0;

/// Buffer outside the arena before a projectile counts as offscreen.
/// Bullets fully leave the visible frame before removal (no pop-out at edges).
pub const OFFSCREEN_MARGIN: f32 = 100.0;

// --- Projectiles ---

/// Units travelled per tick by every projectile kind.
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Default projectile render/collision scale.
pub const PROJECTILE_SCALE: f32 = 0.15;

/// Unscaled side length of the square projectile collision box.
pub const PROJECTILE_COLLISION_SIZE: f32 = 10.0;

/// Visual rotation offset applied by the renderer so sprites authored
/// nose-up line up with the stored travel angle. Never part of sim state.
pub const SPRITE_ROTATION_OFFSET_DEG: f32 = 90.0;

// --- Player ship ---

pub const PLAYER_START_HEALTH: i32 = 100;

pub const PLAYER_SCALE: f32 = 0.5;

/// Spawn height above the bottom arena edge.
pub const PLAYER_SPAWN_BOTTOM_OFFSET: f32 = 200.0;

/// Unscaled forward offset of the muzzle from the ship center.
pub const PLAYER_MUZZLE_OFFSET: f32 = 50.0;

/// Top speed of the movement controller ramp (units per tick).
pub const PLAYER_MAX_SPEED: f32 = 15.0;

/// Speed gained per tick while any movement key is held.
pub const PLAYER_ACCELERATION: f32 = 0.5;

/// With no input the ramp decays to this fraction of max speed. Produces no
/// displacement (direction is zero) but sets the ramp-up starting point.
pub const PLAYER_IDLE_SPEED_FACTOR: f32 = 0.3;

/// Arena clamp margin per unit of ship scale, applied on all four sides.
pub const PLAYER_CLAMP_MARGIN_FACTOR: f32 = 20.0;

// --- Enemies ---

pub const ENEMY_HEALTH: i32 = 50;

/// Base pursuit speed (units per tick, before the deceleration factor).
pub const ENEMY_SPEED: f32 = 2.0;

pub const ENEMY_SCALE: f32 = 0.4;

/// Damage dealt to the player by a kamikaze body collision.
pub const ENEMY_CONTACT_DAMAGE: i32 = 20;

/// Maximum rotation change per tick (degrees).
pub const ENEMY_TURN_RATE_DEG: f32 = 0.5;

/// Within this distance of the player, speed scales down linearly.
pub const ENEMY_DECEL_RANGE: f32 = 200.0;

/// Enemies this close to the player stop closing in.
pub const ENEMY_CHASE_DEADZONE: f32 = 5.0;

/// Per-instance fire interval, randomized in this range (1.5–4.0 s).
pub const ENEMY_FIRE_INTERVAL_MIN_TICKS: u64 = 90;
pub const ENEMY_FIRE_INTERVAL_MAX_TICKS: u64 = 240;

/// Interval between enemy spawns (5 s).
pub const ENEMY_SPAWN_INTERVAL_TICKS: u64 = 300;

/// Horizontal inset of the spawn band from both arena edges.
pub const ENEMY_SPAWN_MARGIN_X: f32 = 100.0;

/// Vertical spawn band near the top of the arena.
pub const ENEMY_SPAWN_Y_MIN: f32 = 50.0;
pub const ENEMY_SPAWN_Y_MAX: f32 = 200.0;

// --- Turrets ---

pub const TURRET_HEALTH: i32 = 50;

pub const TURRET_SCALE: f32 = 0.2;

/// Interval between turret shots (1 s), independent of the main tick rate.
pub const TURRET_FIRE_INTERVAL_TICKS: u64 = 60;

/// Placement of the two session turrets: left at a fixed offset, right
/// inset from the arena's right edge, both at the same height.
pub const TURRET_LEFT_X: f32 = 150.0;
pub const TURRET_RIGHT_INSET: f32 = 250.0;
pub const TURRET_Y: f32 = 150.0;

// --- Damage ---

/// Damage a player shot deals to enemies and turrets.
pub const PLAYER_SHOT_DAMAGE: i32 = 20;

/// Damage an enemy shot deals to the player.
pub const ENEMY_SHOT_DAMAGE: i32 = 10;

/// Damage a turret shot deals to the player.
pub const TURRET_SHOT_DAMAGE: i32 = 10;

// --- Score ---

pub const SCORE_ENEMY_KILL: i64 = 100;

pub const SCORE_TURRET_KILL: i64 = 500;

// --- Silhouettes ---

/// Padding added beyond the furthest silhouette point when sizing sprites.
pub const SILHOUETTE_PAD: f32 = 5.0;

/// Minimum silhouette extent on either axis. Degenerate point sets get a
/// usable collision box instead of propagating an error.
pub const SILHOUETTE_MIN_EXTENT: f32 = 10.0;
