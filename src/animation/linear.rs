use super::{MotionStrategy, Point};

/// Configuration for clamped constant-speed motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearConfig {
    /// Speed along each axis in units per millisecond (default: 0.3)
    pub speed: f32,
}

impl LinearConfig {
    pub const DEFAULT: Self = Self { speed: 0.3 };

    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MotionStrategy for LinearConfig {
    fn retarget(&self, point: &mut Point) {
        // Direction may have flipped, so it is always recomputed.
        point.vx = if point.target_x > point.x {
            self.speed
        } else {
            -self.speed
        };
        point.vy = if point.target_y > point.y {
            self.speed
        } else {
            -self.speed
        };
    }

    fn step(&self, point: &mut Point, dt_ms: f32) {
        point.x += point.vx * dt_ms;
        point.y += point.vy * dt_ms;

        point.x = if point.vx > 0.0 {
            point.x.min(point.target_x)
        } else {
            point.x.max(point.target_x)
        };
        point.y = if point.vy > 0.0 {
            point.y.min(point.target_y)
        } else {
            point.y.max(point.target_y)
        };
    }
}
