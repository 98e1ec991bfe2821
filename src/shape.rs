//! Closed rectangular outline made of animated points.
//!
//! The outline is stored as five points: the four corners in clockwise order
//! followed by the first corner again, so the stroke path closes without the
//! host having to know about it. Points are never recreated by a retarget,
//! which is what lets a release halfway through a press reverse smoothly.

use std::time::{Duration, Instant};

use crate::animation::{MotionStrategy, Point};
use crate::geometry::{Padding, Rect};

/// Number of vertices in an outline, including the closing repeat.
pub const POINT_COUNT: usize = 5;

/// Snapshot of the current vertex positions, ready to stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    points: [(f32, f32); POINT_COUNT],
}

impl Outline {
    /// All five vertices, closing repeat included.
    pub fn points(&self) -> &[(f32, f32); POINT_COUNT] {
        &self.points
    }

    /// Iterate over the vertices in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.points.iter().copied()
    }

    /// Where the host's path starts (`move_to`).
    pub fn start(&self) -> (f32, f32) {
        self.points[0]
    }

    /// Line segments in drawing order (`line_to` after `move_to(start)`).
    pub fn segments(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Whether the path ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points[0] == self.points[POINT_COUNT - 1]
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a (f32, f32);
    type IntoIter = std::slice::Iter<'a, (f32, f32)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Corners of `rect` in drawing order, with the first repeated at the end.
fn closed_loop(rect: &Rect) -> [(f32, f32); POINT_COUNT] {
    let [a, b, c, d] = rect.corners();
    [a, b, c, d, a]
}

#[derive(Clone, Debug)]
pub struct Shape {
    points: [Point; POINT_COUNT],
}

impl Shape {
    /// The padded content rectangle, with every point at rest.
    pub fn resting(bounds: Rect, margins: Padding, now: Instant) -> Self {
        let corners = closed_loop(&bounds.pad(&margins));
        Self {
            points: corners.map(|(x, y)| Point::at_rest(x, y, now)),
        }
    }

    /// Head for the rectangle `outer_inset` in from the container edge.
    pub fn expand(
        &mut self,
        bounds: Rect,
        outer_inset: f32,
        now: Instant,
        strategy: &dyn MotionStrategy,
    ) {
        self.retarget_to(&bounds.inset(outer_inset), now, strategy);
    }

    /// Head back to the padded content rectangle.
    pub fn contract(
        &mut self,
        bounds: Rect,
        margins: Padding,
        now: Instant,
        strategy: &dyn MotionStrategy,
    ) {
        self.retarget_to(&bounds.pad(&margins), now, strategy);
    }

    /// Retarget every point onto the corners of `rect`, keeping positions.
    pub fn retarget_to(&mut self, rect: &Rect, now: Instant, strategy: &dyn MotionStrategy) {
        for (point, (x, y)) in self.points.iter_mut().zip(closed_loop(rect)) {
            point.retarget(x, y, now, strategy);
        }
    }

    /// Advance every point by one tick.
    pub fn advance(&mut self, now: Instant, max_step: Duration, strategy: &dyn MotionStrategy) {
        for point in &mut self.points {
            point.advance(now, max_step, strategy);
        }
    }

    /// Whether every point has arrived.
    pub fn is_finished(&self, tolerance: f32) -> bool {
        self.points.iter().all(|p| p.is_finished(tolerance))
    }

    /// The animated vertices, in the same order as [`Outline::points`].
    pub fn points(&self) -> &[Point; POINT_COUNT] {
        &self.points
    }

    /// Current positions, including mid-animation.
    pub fn outline(&self) -> Outline {
        Outline {
            points: self.points.each_ref().map(Point::position),
        }
    }

    /// Destination positions.
    pub fn target_outline(&self) -> Outline {
        Outline {
            points: self.points.each_ref().map(Point::target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{LinearConfig, SpringConfig};

    const MAX_STEP: Duration = Duration::from_millis(50);
    const TICK: Duration = Duration::from_millis(15);

    fn assert_near(actual: (f32, f32), expected: (f32, f32), tolerance: f32) {
        assert!(
            (actual.0 - expected.0).abs() <= tolerance && (actual.1 - expected.1).abs() <= tolerance,
            "{:?} not within {} of {:?}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_resting_is_padded_rect() {
        let shape = Shape::resting(
            Rect::from_size(100.0, 60.0),
            Padding::symmetric(10.0, 5.0),
            Instant::now(),
        );
        assert_eq!(
            shape.outline().points(),
            &[(10.0, 5.0), (90.0, 5.0), (90.0, 55.0), (10.0, 55.0), (10.0, 5.0)]
        );
        assert!(shape.is_finished(0.1));
    }

    #[test]
    fn test_expand_keeps_positions() {
        let now = Instant::now();
        let bounds = Rect::from_size(100.0, 100.0);
        let mut shape = Shape::resting(bounds, Padding::all(40.0), now);
        let before = shape.outline();

        shape.expand(bounds, 24.0, now, &SpringConfig::DEFAULT);

        assert_eq!(shape.outline(), before);
        assert_eq!(
            shape.target_outline().points(),
            &[(24.0, 24.0), (76.0, 24.0), (76.0, 76.0), (24.0, 76.0), (24.0, 24.0)]
        );
        assert!(!shape.is_finished(0.1));
    }

    #[test]
    fn test_spring_expand_converges_to_inset_corners() {
        let start = Instant::now();
        let bounds = Rect::from_size(100.0, 100.0);
        let spring = SpringConfig::DEFAULT;
        let mut shape = Shape::resting(bounds, Padding::default(), start);
        shape.expand(bounds, 24.0, start, &spring);

        let mut now = start;
        let mut ticks = 0;
        while !shape.is_finished(0.1) {
            now += TICK;
            shape.advance(now, MAX_STEP, &spring);
            ticks += 1;
            assert!(ticks < 10_000);
        }

        let expected = [(24.0, 24.0), (76.0, 24.0), (76.0, 76.0), (24.0, 76.0), (24.0, 24.0)];
        for (actual, expected) in shape.outline().iter().zip(expected) {
            assert_near(actual, expected, 0.1);
        }
    }

    #[test]
    fn test_outline_closed_after_any_retarget() {
        let start = Instant::now();
        let bounds = Rect::from_size(120.0, 80.0);
        let margins = Padding::all(12.0);
        let linear = LinearConfig::DEFAULT;
        let mut shape = Shape::resting(bounds, margins, start);

        let mut now = start;
        for round in 0..6 {
            if round % 2 == 0 {
                shape.expand(bounds, 4.0, now, &linear);
            } else {
                shape.contract(bounds, margins, now, &linear);
            }
            assert!(shape.target_outline().is_closed());
            for _ in 0..(round + 1) {
                now += TICK;
                shape.advance(now, MAX_STEP, &linear);
                assert!(shape.outline().is_closed());
            }
        }
    }

    #[test]
    fn test_release_midway_reverses_without_jump() {
        let start = Instant::now();
        let bounds = Rect::from_size(100.0, 100.0);
        let margins = Padding::all(30.0);
        let linear = LinearConfig::DEFAULT;
        let mut shape = Shape::resting(bounds, margins, start);
        shape.expand(bounds, 4.0, start, &linear);

        // 26 units at 4.5 per tick: three ticks is about halfway.
        let mut now = start;
        for _ in 0..3 {
            now += TICK;
            shape.advance(now, MAX_STEP, &linear);
        }
        let midway = shape.outline();
        assert_near(midway.start(), (16.5, 16.5), 1e-3);

        shape.contract(bounds, margins, now, &linear);
        assert_eq!(shape.outline(), midway);

        now += TICK;
        shape.advance(now, MAX_STEP, &linear);
        assert_near(shape.outline().start(), (21.0, 21.0), 1e-3);
    }

    #[test]
    fn test_segments_follow_outline() {
        let shape = Shape::resting(Rect::from_size(10.0, 10.0), Padding::default(), Instant::now());
        let outline = shape.outline();
        let segments: Vec<_> = outline.segments().collect();
        assert_eq!(segments.len(), POINT_COUNT - 1);
        assert_eq!(segments[0], ((0.0, 0.0), (10.0, 0.0)));
        assert_eq!(segments[3], ((0.0, 10.0), (0.0, 0.0)));
    }
}
