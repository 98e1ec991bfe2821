//! Per-vertex motion models.
//!
//! A [`Point`] carries its own position, target and transient motion state.
//! How it travels toward the target is decided by a [`MotionStrategy`]:
//!
//! - [`SpringConfig`] - Hooke's-law pull with geometric velocity decay.
//!   Velocity survives a retarget, so an interrupted motion bends smoothly.
//! - [`LinearConfig`] - Constant speed per axis, clamped at the target so it
//!   never overshoots. Direction is recomputed on every retarget.
//!
//! [`Motion`] selects one of the built-in strategies from configuration.
//! Hosts that need another curve can implement [`MotionStrategy`] directly.

mod linear;
mod point;
mod spring;

use std::fmt;

pub use linear::LinearConfig;
pub use point::Point;
pub use spring::SpringConfig;

/// Update rule applied to a single [`Point`].
///
/// Strategies hold configuration only. All mutable motion state lives on the
/// point, so one strategy can drive any number of points.
pub trait MotionStrategy: fmt::Debug {
    /// Called after the point's target changed.
    ///
    /// Must not move the point: `x`/`y` are the starting position of the new
    /// motion.
    fn retarget(&self, point: &mut Point);

    /// Integrate one step. `dt_ms` is already clamped to `[0, max_step]`.
    fn step(&self, point: &mut Point, dt_ms: f32);
}

/// Built-in motion model selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Damped spring toward the target
    Spring(SpringConfig),
    /// Constant speed, clamped at the target
    Linear(LinearConfig),
}

impl MotionStrategy for Motion {
    fn retarget(&self, point: &mut Point) {
        match self {
            Motion::Spring(config) => config.retarget(point),
            Motion::Linear(config) => config.retarget(point),
        }
    }

    fn step(&self, point: &mut Point, dt_ms: f32) {
        match self {
            Motion::Spring(config) => config.step(point, dt_ms),
            Motion::Linear(config) => config.step(point, dt_ms),
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Spring(SpringConfig::DEFAULT)
    }
}

impl From<SpringConfig> for Motion {
    fn from(config: SpringConfig) -> Self {
        Motion::Spring(config)
    }
}

impl From<LinearConfig> for Motion {
    fn from(config: LinearConfig) -> Self {
        Motion::Linear(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_motion_dispatches_to_config() {
        let start = Instant::now();
        let linear = Motion::from(LinearConfig::DEFAULT);
        let mut point = Point::at_rest(0.0, 0.0, start);
        point.retarget(100.0, 0.0, start, &linear);
        point.advance(start + Duration::from_millis(10), Duration::from_millis(50), &linear);
        assert!((point.x - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_default_motion_is_spring() {
        assert_eq!(Motion::default(), Motion::Spring(SpringConfig::DEFAULT));
    }
}
