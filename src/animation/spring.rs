use super::{MotionStrategy, Point};

/// Configuration for spring motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Pull toward the target per unit of distance (default: 0.5)
    pub stiffness: f32,
    /// Fraction of velocity kept after each step, in (0, 1) (default: 0.9)
    pub viscosity: f32,
}

impl SpringConfig {
    /// Default spring, settles in roughly two seconds at 15 ms ticks
    pub const DEFAULT: Self = Self {
        stiffness: 0.5,
        viscosity: 0.9,
    };

    /// Stiffer spring that arrives sooner and wobbles less
    pub const SNAPPY: Self = Self {
        stiffness: 1.2,
        viscosity: 0.8,
    };

    /// Whether explicit Euler integration stays bounded at steps of `dt_ms`.
    ///
    /// One step maps `(offset, velocity)` through a matrix with determinant
    /// `viscosity` and trace `1 + viscosity - viscosity * stiffness * dt² / 1000`.
    /// Both eigenvalues stay inside the unit circle while the trace is above
    /// `-(1 + viscosity)`.
    pub fn is_stable_at(&self, dt_ms: f32) -> bool {
        self.viscosity * self.stiffness * dt_ms * dt_ms / 1000.0 < 2.0 * (1.0 + self.viscosity)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MotionStrategy for SpringConfig {
    fn retarget(&self, _point: &mut Point) {
        // Velocity carries over into the new motion.
    }

    fn step(&self, point: &mut Point, dt_ms: f32) {
        // Unit mass: acceleration equals the spring force.
        let ax = self.stiffness * (point.target_x - point.x);
        let ay = self.stiffness * (point.target_y - point.y);

        point.vx += ax * dt_ms;
        point.vy += ay * dt_ms;

        point.vx *= self.viscosity;
        point.vy *= self.viscosity;

        // Velocity is in units per second.
        point.x += point.vx * dt_ms / 1000.0;
        point.y += point.vy * dt_ms / 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    const MAX_STEP: Duration = Duration::from_millis(50);
    const TICK: Duration = Duration::from_millis(15);

    fn run_ticks(point: &mut Point, start: Instant, ticks: u32, spring: &SpringConfig) -> Instant {
        let mut now = start;
        for _ in 0..ticks {
            now += TICK;
            point.advance(now, MAX_STEP, spring);
        }
        now
    }

    #[test]
    fn test_single_step_matches_formula() {
        let start = Instant::now();
        let spring = SpringConfig::DEFAULT;
        let mut point = Point::at_rest(0.0, 0.0, start);
        point.retarget(10.0, -10.0, start, &spring);
        point.advance(start + TICK, MAX_STEP, &spring);

        // a = 0.5 * 10 = 5; v = 5 * 15 * 0.9 = 67.5; x = 67.5 * 15 / 1000
        assert!((point.vx - 67.5).abs() < 1e-4);
        assert!((point.vy + 67.5).abs() < 1e-4);
        assert!((point.x - 1.0125).abs() < 1e-5);
        assert!((point.y + 1.0125).abs() < 1e-5);
    }

    #[test]
    fn test_spring_reaches_target() {
        let start = Instant::now();
        let spring = SpringConfig::DEFAULT;
        let mut point = Point::at_rest(0.0, 100.0, start);
        point.retarget(100.0, 0.0, start, &spring);

        let mut finished_at = None;
        let mut now = start;
        for tick in 0..10_000 {
            now += TICK;
            point.advance(now, MAX_STEP, &spring);
            if point.is_finished(0.1) {
                finished_at = Some(tick);
                break;
            }
        }

        let finished_at = finished_at.expect("spring never settled");
        assert!(finished_at < 1_000, "settled only after {} ticks", finished_at);
    }

    #[test]
    fn test_spring_converges_from_anywhere_in_bounds() {
        let spring = SpringConfig::DEFAULT;
        let starts = [
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0),
            (50.0, 13.0),
            (-20.0, 120.0),
        ];
        for &(x, y) in &starts {
            let start = Instant::now();
            let mut point = Point::at_rest(x, y, start);
            point.retarget(24.0, 76.0, start, &spring);
            run_ticks(&mut point, start, 10_000, &spring);
            assert!(point.is_finished(0.1), "({}, {}) did not converge", x, y);
            assert!(point.vx.is_finite() && point.vy.is_finite());
        }
    }

    #[test]
    fn test_spring_converges_at_max_step() {
        let start = Instant::now();
        let spring = SpringConfig::DEFAULT;
        let mut point = Point::at_rest(0.0, 0.0, start);
        point.retarget(76.0, 76.0, start, &spring);

        // Every gap is longer than the clamp.
        let mut now = start;
        for _ in 0..2_000 {
            now += Duration::from_millis(400);
            point.advance(now, MAX_STEP, &spring);
        }
        assert!(point.is_finished(0.1));
    }

    #[test]
    fn test_spring_overshoots() {
        let start = Instant::now();
        let spring = SpringConfig::DEFAULT;
        let mut point = Point::at_rest(0.0, 0.0, start);
        point.retarget(100.0, 0.0, start, &spring);

        let mut max_x: f32 = 0.0;
        let mut now = start;
        for _ in 0..200 {
            now += TICK;
            point.advance(now, MAX_STEP, &spring);
            max_x = max_x.max(point.x);
        }
        assert!(max_x > 100.0, "expected overshoot, max was {}", max_x);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let start = Instant::now();
        let spring = SpringConfig::DEFAULT;
        let mut point = Point::at_rest(0.0, 0.0, start);
        point.retarget(100.0, 100.0, start, &spring);
        let now = run_ticks(&mut point, start, 3, &spring);

        let velocity = (point.vx, point.vy);
        assert!(velocity.0 > 0.0);

        point.retarget(0.0, 0.0, now, &spring);
        assert_eq!((point.vx, point.vy), velocity);
    }

    #[test]
    fn test_first_arrival_can_be_a_pass_through() {
        let start = Instant::now();
        let spring = SpringConfig::DEFAULT;
        let mut point = Point::at_rest(0.0, 0.0, start);
        point.retarget(24.0, 24.0, start, &spring);

        let mut now = start;
        let mut first_arrival = None;
        let mut left_again = false;
        for tick in 0..2_000 {
            now += TICK;
            point.advance(now, MAX_STEP, &spring);
            match (first_arrival, point.is_finished(0.1)) {
                (None, true) => first_arrival = Some(tick),
                (Some(_), false) => left_again = true,
                _ => {}
            }
        }

        // Arrival is judged on position alone; the spring may still be moving.
        assert!(first_arrival.is_some());
        assert!(left_again);
        assert!(point.is_finished(0.1));
    }

    #[test]
    fn test_spring_stays_settled_once_velocity_decays() {
        let start = Instant::now();
        let spring = SpringConfig::DEFAULT;
        let mut point = Point::at_rest(0.0, 0.0, start);
        point.retarget(40.0, 60.0, start, &spring);
        let now = run_ticks(&mut point, start, 2_000, &spring);
        assert!(point.is_finished(0.1));

        let mut now = now;
        for _ in 0..1_000 {
            now += TICK;
            point.advance(now, MAX_STEP, &spring);
            assert!(point.is_finished(0.1));
        }
    }

    #[test]
    fn test_stability_bound() {
        let spring = SpringConfig::DEFAULT;
        assert!(spring.is_stable_at(50.0));
        assert!(spring.is_stable_at(90.0));
        assert!(!spring.is_stable_at(95.0));
    }
}
