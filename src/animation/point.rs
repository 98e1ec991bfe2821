use std::time::{Duration, Instant};

use super::MotionStrategy;

/// A single animated vertex.
///
/// `vx`/`vy` hold whatever transient state the active strategy keeps: velocity
/// in units per second for the spring, signed speed in units per millisecond
/// for linear motion.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// Current position
    pub x: f32,
    pub y: f32,
    /// Destination
    pub target_x: f32,
    pub target_y: f32,
    /// Strategy-owned motion state
    pub vx: f32,
    pub vy: f32,
    /// Time of the last retarget or advance
    last_tick: Instant,
}

impl Point {
    /// A point resting at `(x, y)` with no motion.
    pub fn at_rest(x: f32, y: f32, now: Instant) -> Self {
        Self {
            x,
            y,
            target_x: x,
            target_y: y,
            vx: 0.0,
            vy: 0.0,
            last_tick: now,
        }
    }

    /// Point a new destination while keeping the current position.
    pub fn retarget(
        &mut self,
        target_x: f32,
        target_y: f32,
        now: Instant,
        strategy: &dyn MotionStrategy,
    ) {
        self.target_x = target_x;
        self.target_y = target_y;
        self.last_tick = now;
        strategy.retarget(self);
    }

    /// Advance by the time elapsed since the last tick, clamped to `max_step`.
    ///
    /// A clock that went backwards yields a zero-length step.
    pub fn advance(&mut self, now: Instant, max_step: Duration, strategy: &dyn MotionStrategy) {
        let elapsed = now.saturating_duration_since(self.last_tick).min(max_step);
        self.last_tick = now;
        strategy.step(self, (elapsed.as_secs_f64() * 1000.0) as f32);
    }

    /// Whether both axes are within `tolerance` of the target.
    pub fn is_finished(&self, tolerance: f32) -> bool {
        (self.x - self.target_x).abs() <= tolerance && (self.y - self.target_y).abs() <= tolerance
    }

    /// Current `(x, y)`
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Destination `(x, y)`
    pub fn target(&self) -> (f32, f32) {
        (self.target_x, self.target_y)
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }
}
