//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle used for all collision tests.
/// Origin at top-left, +y pointing down (screen coordinates).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered_at(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// AABB overlap test. Touching edges do not count as intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// The visible play rectangle. Mutable external input: the windowing layer
/// may resize it at any time, so bounds checks re-read it every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaSize {
    fn default() -> Self {
        Self {
            width: crate::constants::ARENA_WIDTH,
            height: crate::constants::ARENA_HEIGHT,
        }
    }
}

impl ArenaSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if `point` lies inside the arena expanded by `margin` on all
    /// four sides. A point exactly `margin` units outside still counts as
    /// inside, so projectiles fully leave the visible frame before removal.
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Shortest signed difference `to - from` between two angles in degrees,
/// wrapped into [-180, 180). Positive means turning clockwise (screen
/// coordinates) reaches `to` faster.
pub fn angle_difference_deg(from: f32, to: f32) -> f32 {
    (to - from + 540.0).rem_euclid(360.0) - 180.0
}
